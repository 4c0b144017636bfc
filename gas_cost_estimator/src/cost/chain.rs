//!
//! The per-chain pricing inputs.
//!

///
/// The per-chain pricing inputs.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainPricing {
    /// The gas price in gwei.
    pub gas_price: f64,
    /// The fiat price of one native token.
    pub fiat_price: f64,
}

impl ChainPricing {
    /// The gwei to native token conversion factor.
    pub const GWEI: f64 = 1e-9;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(gas_price: f64, fiat_price: f64) -> Self {
        Self {
            gas_price,
            fiat_price,
        }
    }

    ///
    /// The cost of `amount` gas in native tokens.
    ///
    pub fn native_cost(&self, amount: u64) -> f64 {
        let gas_price_native = self.gas_price * Self::GWEI;
        amount as f64 * gas_price_native
    }

    ///
    /// The cost of `amount` gas in fiat.
    ///
    pub fn fiat_cost(&self, amount: u64) -> f64 {
        self.native_cost(amount) * self.fiat_price
    }
}
