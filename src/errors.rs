use std::fmt::Display;

#[derive(Debug)]
pub enum StatsError {
    /// Non-2xx status from the upstream API.
    Connectivity { url: String, status: u16 },
    Transport(reqwest::Error),
    Decode(reqwest::Error),
    WinnerNotFound { competition: String, year: u16 },
}

impl Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Connectivity { url, status } => {
                write!(f, "cannot connect to {url}, status {status}")
            }
            StatsError::Transport(e) => write!(f, "transport failure: {e}"),
            StatsError::Decode(e) => write!(f, "invalid response body: {e}"),
            StatsError::WinnerNotFound { competition, year } => {
                write!(f, "no winner found for {competition} in {year}")
            }
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Transport(e) | StatsError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StatsError::Decode(e)
        } else {
            StatsError::Transport(e)
        }
    }
}
