use log::{error, info};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::ItemEncodeError;
use crate::models::Product;

const INDENT: &[u8] = b"    ";

/// Where rendered products and per-item failures go.
pub trait Sink {
    fn emit(&mut self, block: &str);
    fn fail(&mut self, err: &ItemEncodeError);
}

/// Writes everything through the `log` facade.
pub struct LogSink;

impl Sink for LogSink {
    fn emit(&mut self, block: &str) {
        info!("{block}");
    }

    fn fail(&mut self, err: &ItemEncodeError) {
        error!("{err}");
    }
}

#[derive(Debug, Default)]
pub struct PrintReport {
    pub printed: Vec<Product>,
    pub failed: usize,
}

pub fn pretty_encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

pub fn encode_product(product: &Product) -> Result<String, ItemEncodeError> {
    pretty_encode(product).map_err(|source| ItemEncodeError {
        id: product.id,
        source,
    })
}

/// Renders each product in order. A product that fails to encode is reported
/// to the sink and skipped; the rest are still printed.
pub fn print_products<E, S>(products: Vec<Product>, encode: E, sink: &mut S) -> PrintReport
where
    E: Fn(&Product) -> Result<String, ItemEncodeError>,
    S: Sink + ?Sized,
{
    let mut report = PrintReport::default();
    for product in products {
        match encode(&product) {
            Ok(block) => {
                sink.emit(&block);
                report.printed.push(product);
            }
            Err(e) => {
                sink.fail(&e);
                report.failed += 1;
            }
        }
    }
    report
}
