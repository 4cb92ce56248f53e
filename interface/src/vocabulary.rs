//! The values clients offer for otherwise free-form string fields.
//!
//! The program stores whatever string it is given, so these only constrain input. Decoded data may
//! hold anything, which is why the accessors that render it fall back instead of failing.

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    Fish,
    Turtle,
    Snake,
    Lizard,
    Horse,
    Ferret,
    #[strum(serialize = "Guinea Pig")]
    GuineaPig,
}

/// Shown for species outside [`Species`].
pub const DEFAULT_SPECIES_EMOJI: &str = "\u{1F43E}";

impl Species {
    #[rustfmt::skip]
    pub fn emoji(&self) -> &'static str {
        match self {
            Species::Dog       => "\u{1F415}",
            Species::Cat       => "\u{1F431}",
            Species::Bird      => "\u{1F99C}",
            Species::Rabbit    => "\u{1F407}",
            Species::Hamster   => "\u{1F439}",
            Species::Fish      => "\u{1F420}",
            Species::Turtle    => "\u{1F422}",
            Species::Snake     => "\u{1F40D}",
            Species::Lizard    => "\u{1F98E}",
            Species::Horse     => "\u{1F434}",
            Species::Ferret    => "\u{1F9A6}",
            Species::GuineaPig => "\u{1F439}",
        }
    }
}

/// Emoji for a decoded, free-form species string.
pub fn species_emoji(species: &str) -> &'static str {
    species
        .parse::<Species>()
        .map_or(DEFAULT_SPECIES_EMOJI, |species| species.emoji())
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
pub enum HealthRecordType {
    #[default]
    Checkup,
    Surgery,
    Accident,
    Allergy,
    Medication,
    Dental,
    #[strum(serialize = "Lab Work")]
    LabWork,
    #[strum(serialize = "X-Ray")]
    XRay,
    Other,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
pub enum LocationEventType {
    #[default]
    Travel,
    Moved,
    Grooming,
    Boarding,
    Training,
    Competition,
    Adoption,
    Other,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for species in Species::iter() {
            assert_eq!(Species::from_str(&species.to_string()), Ok(species));
        }
        for record_type in HealthRecordType::iter() {
            assert_eq!(
                HealthRecordType::from_str(&record_type.to_string()),
                Ok(record_type)
            );
        }
        for event in LocationEventType::iter() {
            assert_eq!(LocationEventType::from_str(&event.to_string()), Ok(event));
        }
    }

    #[test]
    fn multi_word_names_match_wire_strings() {
        assert_eq!(Species::GuineaPig.to_string(), "Guinea Pig");
        assert_eq!(HealthRecordType::LabWork.to_string(), "Lab Work");
        assert_eq!(HealthRecordType::XRay.to_string(), "X-Ray");
    }

    #[test]
    fn unknown_species_gets_fallback_emoji() {
        assert_eq!(species_emoji("Cat"), "\u{1F431}");
        assert_eq!(species_emoji("Axolotl"), DEFAULT_SPECIES_EMOJI);
        assert_eq!(species_emoji("cat"), DEFAULT_SPECIES_EMOJI);
    }
}
