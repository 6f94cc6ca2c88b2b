use std::io::Read;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect;

use crate::error::FetchError;

/// Client for the single product request. No timeout is set, so a stalled
/// connection blocks the caller indefinitely.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .redirect(redirect::Policy::limited(10))
        .build()
}

pub fn fetch_body(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().map_err(FetchError::Transport)?;
    let status = response.status();
    // The response owns the connection; it is dropped on every path out of read_ok_body.
    read_ok_body(status, response)
}

/// Reads the whole body if the status is 200. Any other status is rejected
/// before the body is touched.
pub fn read_ok_body<R: Read>(status: StatusCode, mut body: R) -> Result<Vec<u8>, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status));
    }

    let mut buf = Vec::new();
    body.read_to_end(&mut buf).map_err(FetchError::Io)?;
    Ok(buf)
}
