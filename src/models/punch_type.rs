use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
pub enum PunchType {
    Entry,
    Exit,
}

impl PunchType {
    /// Convert enum → store string.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::Entry => "entry",
            PunchType::Exit => "exit",
        }
    }

    /// Convert store string → enum.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(PunchType::Entry),
            "exit" => Some(PunchType::Exit),
            _ => None,
        }
    }

    /// Upper-cased literal used in reports ("ENTRY" / "EXIT").
    pub fn report_label(&self) -> &'static str {
        match self {
            PunchType::Entry => "ENTRY",
            PunchType::Exit => "EXIT",
        }
    }

    /// Verb used in admin notifications.
    pub fn verb(&self) -> &'static str {
        match self {
            PunchType::Entry => "entered",
            PunchType::Exit => "exited",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, PunchType::Entry)
    }
}
