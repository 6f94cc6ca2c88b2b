mod error;
mod fetcher;
mod logging;
mod models;
mod parser;
mod printer;

use anyhow::{Context, Result};
use log::{error, info};

use error::{FetchError, PipelineError};
use printer::{LogSink, PrintReport, Sink};

const HOST: &str = "https://dummyjson.com";
const PRODUCT_ENDPOINT: &str = "/products";

fn main() -> Result<()> {
    logging::init();

    let product_url = get_url(HOST, PRODUCT_ENDPOINT);
    info!("=== Product URL: {}", product_url);

    let client = fetcher::build_client().context("Failed to build the HTTP client")?;
    let report = match run(&product_url, |url| fetcher::fetch_body(&client, url), &mut LogSink) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Printed {} products ({} skipped)",
        report.printed.len(),
        report.failed
    );
    Ok(())
}

fn get_url(host: &str, endpoint: &str) -> String {
    format!("{}{}", host, endpoint)
}

/// Fetch, decode, print. Fetch and decode failures end the run before any
/// product reaches the sink.
fn run<F, S>(url: &str, fetch: F, sink: &mut S) -> Result<PrintReport, PipelineError>
where
    F: FnOnce(&str) -> Result<Vec<u8>, FetchError>,
    S: Sink + ?Sized,
{
    let body = fetch(url)?;
    let envelope = parser::decode_envelope(&body)?;
    Ok(printer::print_products(
        envelope.products,
        printer::encode_product,
        sink,
    ))
}
