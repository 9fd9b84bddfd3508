//! Companies offered in the picker, in display order.

/// One selectable company.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Company {
    /// Exchange ticker, submitted as the checkbox value.
    pub ticker: &'static str,
    /// Display name.
    pub name: &'static str,
}

const fn company(ticker: &'static str, name: &'static str) -> Company {
    Company { ticker, name }
}

/// Full catalog rendered as the `companies[]` checkbox group.
pub static COMPANIES: &[Company] = &[
    company("MSFT", "Microsoft Corporation"),
    company("AMZN", "Amazon.com, Inc."),
    company("KO", "The Coca-Cola Company"),
    company("MA", "Mastercard Incorporated"),
    company("COST", "Costco Wholesale Corporation"),
    company("LUV", "Southwest Airlines Co."),
    company("XOM", "Exxon Mobil Corporation"),
    company("PFE", "Pfizer Inc."),
    company("JPM", "JPMorgan Chase & Co."),
    company("UNH", "UnitedHealth Group Incorporated"),
    company("ACN", "Accenture plc"),
    company("DIS", "The Walt Disney Company"),
    company("GILD", "Gilead Sciences, Inc."),
    company("F", "Ford Motor Company"),
    company("TSLA", "Tesla, Inc."),
    company("AAPL", "Apple Inc."),
    company("GOOGL", "Alphabet Inc."),
    company("META", "Meta Platforms, Inc."),
    company("V", "Visa Inc."),
    company("WMT", "Walmart Inc."),
    company("VZ", "Verizon Communications Inc."),
    company("PG", "The Procter & Gamble Company"),
    company("NKE", "NIKE, Inc."),
    company("NFLX", "Netflix, Inc."),
    company("NVDA", "NVIDIA Corporation"),
    company("IBM", "International Business Machines Corporation"),
    company("PEP", "PepsiCo, Inc."),
    company("HD", "The Home Depot, Inc."),
    company("MCD", "McDonald's Corporation"),
    company("MRK", "Merck & Co., Inc."),
    company("INTC", "Intel Corporation"),
    company("CMCSA", "Comcast Corporation"),
    company("BAC", "Bank of America Corporation"),
    company("CSCO", "Cisco Systems, Inc."),
    company("ABT", "Abbott Laboratories"),
    company("T", "AT&T Inc."),
    company("ORCL", "Oracle Corporation"),
    company("TMO", "Thermo Fisher Scientific Inc."),
    company("UNP", "Union Pacific Corporation"),
    company("AMD", "Advanced Micro Devices, Inc."),
    company("MS", "Morgan Stanley"),
    company("ABBV", "AbbVie Inc."),
    company("CVX", "Chevron Corporation"),
    company("LMT", "Lockheed Martin Corporation"),
    company("MO", "Altria Group, Inc."),
    company("MMM", "3M Company"),
    company("BA", "The Boeing Company"),
    company("CAT", "Caterpillar Inc."),
    company("GS", "The Goldman Sachs Group, Inc."),
    company("TXN", "Texas Instruments Incorporated"),
    company("AMGN", "Amgen Inc."),
    company("UPS", "United Parcel Service, Inc."),
];

/// Tickers whose checkbox is checked, in catalog order.
///
/// `states` is matched positionally; extra entries on either side are ignored.
#[must_use]
pub fn selected_tickers<'a>(companies: &'a [Company], states: &[bool]) -> Vec<&'a str> {
    companies
        .iter()
        .zip(states)
        .filter(|(_, checked)| **checked)
        .map(|(company, _)| company.ticker)
        .collect()
}

/// Number of checked entries.
#[must_use]
pub fn selected_count(states: &[bool]) -> usize {
    states.iter().filter(|checked| **checked).count()
}
