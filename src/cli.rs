//! The `tiffin-quote` command: price request JSON in, breakdown JSON out.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use crate::config::PricingConfig;
use crate::error::AppError;
use crate::models::{InMemoryCatalog, TiffinId};
use crate::pricing::{
    calculate_breakdown, quote_tiffin, CalculatePriceRequest, PriceBreakdownResponse,
    PriceCalculationInput, PricingErrorResponse,
};

#[derive(Parser, Debug)]
#[command(
    name = "tiffin-quote",
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    /// Price request JSON file. Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Catalog snapshot JSON with sellers and tiffins.
    #[arg(long, requires = "tiffin")]
    pub catalog: Option<PathBuf>,

    /// Tiffin id to quote from the catalog; its price replaces basePrice.
    #[arg(long, requires = "catalog")]
    pub tiffin: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

fn read_request<R: Read>(input: Option<&PathBuf>, mut stdin: R) -> anyhow::Result<CalculatePriceRequest> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    let request = serde_json::from_str(&raw).map_err(AppError::from)?;
    Ok(request)
}

/// Price the request, quoting a catalog listing when one is named
pub fn run<R: Read>(
    args: &Args,
    config: &PricingConfig,
    stdin: R,
) -> anyhow::Result<PriceBreakdownResponse> {
    let request = read_request(args.input.as_ref(), stdin)?;
    let quantity = request.quantity;

    let breakdown = match (&args.catalog, &args.tiffin) {
        (Some(catalog_path), Some(tiffin)) => {
            let catalog = InMemoryCatalog::load(catalog_path)?;
            let tiffin_id: TiffinId = tiffin.parse()?;
            quote_tiffin(&catalog, &tiffin_id, request).map_err(AppError::from)?
        }
        _ => calculate_breakdown(&PriceCalculationInput::from(request)),
    };

    info!(
        "Final amount {} {}{}",
        breakdown.final_amount,
        config.currency,
        if breakdown.was_clamped() { " (clamped)" } else { "" }
    );

    Ok(PriceBreakdownResponse::from_breakdown(
        &breakdown,
        quantity,
        &config.currency,
        config.money_places,
    ))
}

/// Map a failure to the JSON error body. Errors raised outside the crate
/// (e.g. an unreadable input file) become `internal_error`.
pub fn error_response(err: &anyhow::Error) -> PricingErrorResponse {
    match err.downcast_ref::<AppError>() {
        Some(app_err) => PricingErrorResponse::from(app_err),
        None => PricingErrorResponse {
            error_type: "internal_error".to_string(),
            message: format!("{:#}", err),
            details: None,
        },
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Run the command. `Ok` is the stdout body, `Err` the stderr body; the
/// caller exits non-zero on `Err`.
pub fn execute<R: Read>(
    args: &Args,
    config: &PricingConfig,
    stdin: R,
) -> std::result::Result<String, String> {
    match run(args, config, stdin).and_then(|response| Ok(to_json(&response, args.pretty)?)) {
        Ok(json) => Ok(json),
        Err(err) => {
            error!("Quote failed: {:#}", err);
            let response = error_response(&err);
            Err(to_json(&response, args.pretty).unwrap_or(response.message))
        }
    }
}
