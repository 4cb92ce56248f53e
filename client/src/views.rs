//! Human-readable renderings of decoded pet passports.

use std::fmt;

use anyhow::Context;
use chrono::{
    DateTime,
    NaiveDate,
};
use colored::Colorize;
use pet_passport_interface::{
    state::pet_data::{
        PetData,
        PET_DATA_ACCOUNT_SPACE,
    },
    vocabulary::species_emoji,
};
use solana_address::Address;

use crate::{
    fmt_kv,
    logs::fmt_divider,
    query::PetAccount,
    LogColor,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats unix seconds as a UTC calendar date. Out-of-range values are shown raw.
pub fn fmt_date(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| unix_seconds.to_string())
}

/// Parses a `YYYY-MM-DD` date as unix seconds at UTC midnight.
pub fn parse_date(date: &str) -> anyhow::Result<i64> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .with_context(|| format!("Invalid date `{date}`, expected YYYY-MM-DD"))?;
    Ok(date.and_time(Default::default()).and_utc().timestamp())
}

fn fmt_verified(verified: bool) -> String {
    if verified {
        "verified".color(LogColor::Header).to_string()
    } else {
        "unverified".color(LogColor::Warning).to_string()
    }
}

/// A one-line summary of a pet, for listings.
pub struct PetSummary<'a>(pub &'a PetAccount);

impl fmt::Display for PetSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PetAccount { address, data } = self.0;
        write!(
            f,
            "{} {} ({} {}) {}",
            species_emoji(&data.species),
            data.name.color(LogColor::Highlight).bold(),
            data.species,
            data.breed,
            address.to_string().color(LogColor::FadedGray),
        )
    }
}

/// The full passport: identity, owner and every record in stored order.
pub struct PetPassportView<'a> {
    pub address: &'a Address,
    pub pet: &'a PetData,
}

impl fmt::Display for PetPassportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pet = self.pet;
        writeln!(f, "{}", fmt_divider())?;
        writeln!(
            f,
            "{} {}",
            species_emoji(&pet.species),
            pet.name.color(LogColor::Highlight).bold()
        )?;
        writeln!(f, "{}", fmt_kv!("Passport", self.address))?;
        writeln!(f, "{}", fmt_kv!("Species", &pet.species))?;
        writeln!(f, "{}", fmt_kv!("Breed", &pet.breed))?;
        writeln!(f, "{}", fmt_kv!("Born", fmt_date(pet.birth_date)))?;
        writeln!(f, "{}", fmt_kv!("Owner", pet.owner))?;
        writeln!(f, "{}", fmt_kv!("Last updated", fmt_date(pet.last_updated)))?;
        writeln!(
            f,
            "{}",
            fmt_kv!(
                "Space used",
                format!("{} / {PET_DATA_ACCOUNT_SPACE} bytes", pet.packed_len())
            )
        )?;

        writeln!(
            f,
            "{}",
            format!("Vaccinations ({})", pet.vaccination_records.len()).color(LogColor::Info)
        )?;
        for (i, v) in pet.vaccination_records.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] {} on {}, next due {}, by {} ({})",
                v.vaccine_name,
                fmt_date(v.date_administered),
                fmt_date(v.next_due_date),
                v.veterinarian,
                fmt_verified(v.verified),
            )?;
        }

        writeln!(
            f,
            "{}",
            format!("Health records ({})", pet.health_records.len()).color(LogColor::Info)
        )?;
        for (i, h) in pet.health_records.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] {} on {}: {}, by {} ({})",
                h.record_type,
                fmt_date(h.date),
                h.description,
                h.veterinarian,
                fmt_verified(h.verified),
            )?;
        }

        writeln!(
            f,
            "{}",
            format!("Location history ({})", pet.location_history.len()).color(LogColor::Info)
        )?;
        for (i, l) in pet.location_history.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] {} at {} on {}",
                l.event_type,
                l.location,
                fmt_date(l.timestamp)
            )?;
        }

        Ok(())
    }
}
