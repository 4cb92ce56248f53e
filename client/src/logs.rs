use colored::Color;

/// Formats a key/value pair, optionally overriding the key and value colors.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Usage, where the colors are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!(
            $key,
            $value,
            $crate::LogColor::Highlight,
            $crate::LogColor::FadedGray
        )
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::FadedGray)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!("{}: {}", __k.color($key_color), __v.color($value_color))
    }};
}

/// Prints a key/value pair to stdout. Takes the same arguments as [`fmt_kv!`].
#[macro_export]
macro_rules! print_kv {
    ($($args:tt)*) => {
        ::std::println!("{}", $crate::fmt_kv!($($args)*))
    };
}

/// Prints a key/value pair to stderr. Takes the same arguments as [`fmt_kv!`].
///
/// Used for diagnostics that shouldn't end up in piped command output.
#[macro_export]
macro_rules! eprint_kv {
    ($($args:tt)*) => {
        ::std::eprintln!("{}", $crate::fmt_kv!($($args)*))
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Debug,
    Error,
    Warning,
    Header,
    Info,
    Gray,
    FadedGray,
}

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Renders lamports as SOL, e.g. `1.5 SOL`.
pub fn fmt_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let fraction = lamports % LAMPORTS_PER_SOL;
    if fraction == 0 {
        return format!("{whole} SOL");
    }
    let fraction = format!("{fraction:09}");
    format!("{whole}.{} SOL", fraction.trim_end_matches('0'))
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    const DIVIDER_WIDTH: usize = 80;

    pub fn fmt_divider() -> String { "-".repeat(DIVIDER_WIDTH) }

    pub fn log_divider() { println!("{}", fmt_divider()); }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Debug      => Color::TrueColor { r: 40,  g: 100, b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Gray       => Color::TrueColor { r: 192, g: 192, b: 192 },
                LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;

#[cfg(test)]
mod tests {
    use colored::Colorize;

    use super::*;

    #[test]
    fn kv_macros_accept_optional_colors() {
        colored::control::set_override(false);
        assert_eq!(fmt_kv!("name", "Fluffy"), "name: Fluffy");
        assert_eq!(fmt_kv!("owner", 3, LogColor::Info), "owner: 3");
        assert_eq!(
            fmt_kv!("error", "RecordNotFound", LogColor::Error, LogColor::Warning),
            "error: RecordNotFound"
        );
        print_kv!("hello", "world", LogColor::Info);
        eprint_kv!("hello", "world", LogColor::Warning, LogColor::Gray);
    }

    #[test]
    fn sol_amounts() {
        assert_eq!(fmt_sol(0), "0 SOL");
        assert_eq!(fmt_sol(2 * LAMPORTS_PER_SOL), "2 SOL");
        assert_eq!(fmt_sol(1_500_000_000), "1.5 SOL");
        assert_eq!(fmt_sol(5_000), "0.000005 SOL");
    }

    #[test]
    fn divider_width() {
        assert_eq!(fmt_divider().len(), 80);
    }
}
