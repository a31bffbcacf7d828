//! Sample-time axis.
//!
//! Generated once before a run; one frame is processed per sample time.

use crate::error::{SimError, SimResult};

/// Strictly increasing, finite sample times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeAxis {
    times: Vec<f64>,
}

impl TimeAxis {
    /// `samples` evenly spaced times over `[start, end]`, both endpoints
    /// included. The last time is exactly `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use kuramoto_core::timeline::TimeAxis;
    ///
    /// let axis = TimeAxis::linspace(0.0, 1.0, 5).unwrap();
    /// assert_eq!(axis.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: f64, end: f64, samples: usize) -> SimResult<Self> {
        SimError::ensure_finite("start", start)?;
        SimError::ensure_finite("end", end)?;
        if samples > 1 && end <= start {
            return Err(SimError::invalid_param(
                "end",
                end,
                format!("Must be greater than start ({})", start),
            ));
        }

        let times = match samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                let mut times: Vec<f64> = (0..n - 1).map(|i| start + i as f64 * step).collect();
                times.push(end);
                times
            }
        };
        Ok(Self { times })
    }

    /// Wrap explicit sample times.
    ///
    /// # Errors
    ///
    /// Rejects non-finite times and times that do not strictly increase.
    pub fn from_times(times: Vec<f64>) -> SimResult<Self> {
        for (i, &t) in times.iter().enumerate() {
            SimError::ensure_finite(&format!("times[{}]", i), t)?;
        }
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SimError::invalid_param(
                format!("times[{}]", i + 1),
                times[i + 1],
                "Sample times must strictly increase",
            ));
        }
        Ok(Self { times })
    }

    /// Number of sample times.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if there are no sample times.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample time at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// First sample time.
    pub fn first(&self) -> Option<f64> {
        self.times.first().copied()
    }

    /// Last sample time.
    pub fn last(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Iterate over the sample times.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }

    /// All sample times.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }
}
