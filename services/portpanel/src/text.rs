//! Fixed display strings shown by every view

pub const OPEN: &str = "Åpen";
pub const CLOSED: &str = "Lukket";

pub const STATUS_ERROR: &str = "Feil ved henting av status";
pub const LOG_UNAVAILABLE: &str = "Logg ikke tilgjengelig.";
pub const LOG_ERROR: &str = "Feil ved henting av logg.";
pub const COMMAND_FAILED: &str = "Kommando mislyktes";

pub const BUTTON_OPEN: &str = "Åpne port";
pub const BUTTON_CLOSE: &str = "Lukk port";
pub const BUTTON_TOGGLE: &str = "Åpne/lukk port";
