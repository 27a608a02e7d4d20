//! Interactive menu driving the price analytics.
//!
//! Reads one line at a time, validates it, and prints the reports. Generic
//! over the streams so a whole session can run against in-memory buffers.

use lazy_static::lazy_static;
use regex::Regex;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::PriceError;
use crate::report;
use crate::series::{PriceSeries, SeriesBuilder};

const MAIN_MENU: &str = "\nElpriser\n\
    ========\n\
    1. Inmatning\n\
    2. Min, Max och Medel\n\
    3. Sortera\n\
    4. Bästa Laddningstid (4h)\n\
    e. Avsluta\n\
    \n\
    Ditt val: ";

const ENTRY_INSTRUCTIONS: &str = "\nSkriv in pris per kWh för det tidsintervall som anges och tryck sedan på \"Enter\". Ange samtliga priser i ören.\n\n";
const ENTRY_DONE: &str = "\nKlart! Datan är nu sparad.\n";
const INVALID_INPUT: &str = "Ogiltigt val. Försök igen!\n\n";
const NO_DATA: &str = "Det finns ännu ingen data i systemet. Vänligen återkom hit när du har fyllt i ny data (Menyval 1, \"inmatning\").\n\n";

lazy_static! {
    // ASCII only: `\d` alone would also match other scripts' digits.
    static ref PRICE: Regex = Regex::new(r"^(?-u:\d){1,4}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterPrices,
    Statistics,
    Sorted,
    ChargeWindow,
    Quit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::EnterPrices,
            "2" => MenuChoice::Statistics,
            "3" => MenuChoice::Sorted,
            "4" => MenuChoice::ChargeWindow,
            "e" | "E" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Accepts 1 to 4 ASCII digits and nothing else.
pub fn parse_price(input: &str) -> Option<u32> {
    if !PRICE.is_match(input) {
        return None;
    }
    input.parse().ok()
}

pub struct Shell<R, W, E> {
    input: R,
    out: W,
    err: E,
    cfg: AppConfig,
    series: PriceSeries,
}

impl<R, W, E> Shell<R, W, E>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W, err: E, cfg: AppConfig) -> Self {
        Self {
            input,
            out,
            err,
            cfg,
            series: PriceSeries::Absent,
        }
    }

    /// The most recently completed day, if any.
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Hands back the output and error streams.
    pub fn into_output(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Runs the menu until the user quits or the input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_out(MAIN_MENU).await?;

            let Some(line) = self.read_line().await? else {
                info!("Input closed, ending session.");
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::EnterPrices => {
                    if !self.collect_prices().await? {
                        info!("Input closed during price entry, ending session.");
                        break;
                    }
                }
                MenuChoice::Statistics => {
                    let result = report::statistics_report(&self.series, &self.cfg);
                    self.show(result).await?;
                }
                MenuChoice::Sorted => {
                    let result = report::sorted_report(&self.series, &self.cfg);
                    self.show(result).await?;
                }
                MenuChoice::ChargeWindow => {
                    let result = report::window_report(&self.series, &self.cfg);
                    self.show(result).await?;
                }
                MenuChoice::Quit => {
                    info!("👋 Quit requested.");
                    break;
                }
                MenuChoice::Invalid => {
                    warn!("Invalid menu choice: {:?}", line);
                    self.write_err(INVALID_INPUT).await?;
                }
            }
        }
        self.out.flush().await
    }

    /// Prompts for all 24 hourly prices.
    ///
    /// The current series is replaced only once every slot is filled; returns
    /// `false` if the input ended first.
    async fn collect_prices(&mut self) -> io::Result<bool> {
        self.write_out(ENTRY_INSTRUCTIONS).await?;

        let mut builder = SeriesBuilder::new();
        while let Some(label) = builder.next_label() {
            self.write_out(&format!("{} : ", label)).await?;

            let Some(line) = self.read_line().await? else {
                return Ok(false);
            };

            match parse_price(&line) {
                Some(price) => {
                    debug!("{} -> {} öre", label, price);
                    builder.push(price);
                }
                None => {
                    warn!("Rejected price input {:?} for {}", line, label);
                    self.write_out("\n").await?;
                    self.write_err(INVALID_INPUT).await?;
                }
            }
        }

        if let Some(series) = builder.build() {
            self.series = series;
            info!("✅ Stored prices for 24 hours.");
        }
        self.write_out(ENTRY_DONE).await?;
        Ok(true)
    }

    async fn show(&mut self, result: Result<String, PriceError>) -> io::Result<()> {
        match result {
            Ok(text) => self.write_out(&text).await,
            Err(e @ PriceError::NoDataAvailable) => {
                warn!("⚠️ {}", e);
                self.write_err(NO_DATA).await
            }
        }
    }

    /// Next line without its line ending, or `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    async fn write_out(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    async fn write_err(&mut self, text: &str) -> io::Result<()> {
        self.err.write_all(text.as_bytes()).await?;
        self.err.flush().await
    }
}
