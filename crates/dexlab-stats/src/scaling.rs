//! Min-max scaling onto the unit interval.

/// Linear rescaling fitted on the minimum and maximum of a dataset.
///
/// A degenerate fit (every value equal) maps everything to `0.0` instead of
/// dividing by a zero range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    /// Smallest fitted value, mapped to `0.0`.
    pub min: f64,
    /// Largest fitted value, mapped to `1.0`.
    pub max: f64,
}

impl MinMaxScaler {
    /// Fits a scaler on the given values.
    ///
    /// Returns `None` if there are no values to fit on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dexlab_stats::scaling::MinMaxScaler;
    /// let scaler = MinMaxScaler::fit([4.0, 2.0, 6.0]).unwrap();
    /// assert_eq!(scaler.min, 2.0);
    /// assert_eq!(scaler.max, 6.0);
    /// assert!(MinMaxScaler::fit([]).is_none());
    /// ```
    #[must_use]
    pub fn fit<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(v),
                max: max.max(v),
            }),
        })
    }

    /// Returns `true` if the fitted range is empty.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Maps `value` onto `[0, 1]` relative to the fitted range.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}
