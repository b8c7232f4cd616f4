//! Strategy and leg containers.

use num_traits::Float;

use crate::instruments::VanillaOption;

/// One position within a strategy.
///
/// `quantity` is signed: positive for long, negative for short.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyLeg<T: Float> {
    /// The option contract
    pub option: VanillaOption<T>,
    /// Signed number of contracts
    pub quantity: i32,
}

impl<T: Float> StrategyLeg<T> {
    /// Creates a new leg.
    pub fn new(option: VanillaOption<T>, quantity: i32) -> Self {
        Self { option, quantity }
    }

    /// Quantity lifted into the float type for weighting premiums and Greeks.
    #[inline]
    pub fn weight(&self) -> T {
        T::from(self.quantity).unwrap()
    }
}

/// Named collection of option legs.
///
/// A strategy with no legs can be built but is rejected by the simulator.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_models::strategies::Strategy;
///
/// let mut strategy = Strategy::new("Covered Put Spread");
/// strategy.add_leg(VanillaOption::new(100.0_f64, 0.5, OptionType::Put).unwrap(), 1);
/// strategy.add_leg(VanillaOption::new(90.0_f64, 0.5, OptionType::Put).unwrap(), -1);
///
/// assert_eq!(strategy.name(), "Covered Put Spread");
/// assert_eq!(strategy.legs().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy<T: Float> {
    name: String,
    legs: Vec<StrategyLeg<T>>,
}

impl<T: Float> Strategy<T> {
    /// Creates an empty strategy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            legs: Vec::new(),
        }
    }

    /// Appends a leg.
    pub fn add_leg(&mut self, option: VanillaOption<T>, quantity: i32) {
        self.legs.push(StrategyLeg::new(option, quantity));
    }

    /// Builder-style variant of [`add_leg`](Self::add_leg).
    pub fn with_leg(mut self, option: VanillaOption<T>, quantity: i32) -> Self {
        self.add_leg(option, quantity);
        self
    }

    /// Returns the strategy name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the legs in insertion order.
    #[inline]
    pub fn legs(&self) -> &[StrategyLeg<T>] {
        &self.legs
    }

    /// Returns `true` if the strategy has no legs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The first leg, whose expiry defines the strategy horizon.
    #[inline]
    pub fn first_leg(&self) -> Option<&StrategyLeg<T>> {
        self.legs.first()
    }
}
