use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("upstream answered {path} with status {status}")]
    Status { path: &'static str, status: u16 },

    #[error("upstream reported failure for {path}")]
    NotOk { path: &'static str },
}
