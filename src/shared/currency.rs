//! Cryptocurrency and fiat currency code tables.

use super::wire_enum;

wire_enum! {
    /// Cryptocurrency identifier (`psys_cid` on the wire).
    pub enum CryptoCurrency ("cryptocurrency") {
        Btc => "BTC",
        Eth => "ETH",
        Ltc => "LTC",
        Dash => "DASH",
        Tzec => "TZEC",
        Doge => "DOGE",
        Bch => "BCH",
        Xmr => "XMR",
        Zec => "ZEC",
        Etc => "ETC",
        Bnb => "BNB",
        Trx => "TRX",
        Ton => "TON",
        Sol => "SOL",
        Shib => "SHIB",
        Ape => "APE",
        Busd => "BUSD",
        Usdc => "USDC",
        Usdt => "USDT",
        UsdtTrx => "USDT_TRX",
        UsdtBsc => "USDT_BSC",
        UsdcBsc => "USDC_BSC",
        BttTrx => "BTT_TRX",
    }
}

impl CryptoCurrency {
    /// Parse a currency list `cid`, which may use `-` where the code table uses `_`.
    pub fn from_cid(cid: &str) -> Result<Self, crate::error::UnknownCode> {
        cid.replace('-', "_").parse()
    }
}

wire_enum! {
    /// Fiat currency used to price invoices and quote rates.
    pub enum FiatCurrency ("fiat currency") {
        Usd => "USD",
        Eur => "EUR",
        Gbp => "GBP",
        Aud => "AUD",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Czk => "CZK",
        Dkk => "DKK",
        Hkd => "HKD",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Jpy => "JPY",
        Krw => "KRW",
        Mxn => "MXN",
        Nok => "NOK",
        Nzd => "NZD",
        Php => "PHP",
        Pln => "PLN",
        Rub => "RUB",
        Sek => "SEK",
        Sgd => "SGD",
        Thb => "THB",
        Try => "TRY",
        Uah => "UAH",
        Brl => "BRL",
        Aed => "AED",
        Zar => "ZAR",
    }
}
