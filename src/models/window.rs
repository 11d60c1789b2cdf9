use clap::ValueEnum;

/// Enumerated time-range filter for attendance records.
///
/// Parsing happens at the CLI boundary (clap value enum) or through
/// [`Window::from_str`], so an out-of-range value fails fast instead of
/// silently passing records through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Window {
    All,
    Today,
    Week,
    Month,
    Year,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::All => "all",
            Window::Today => "today",
            Window::Week => "week",
            Window::Month => "month",
            Window::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Window::All),
            "today" => Some(Window::Today),
            "week" => Some(Window::Week),
            "month" => Some(Window::Month),
            "year" => Some(Window::Year),
            _ => None,
        }
    }
}
