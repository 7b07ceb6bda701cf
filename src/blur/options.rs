use crate::error::BlurError;
use crate::utils::validate_std_dev;

/// Number of passes per axis used when `passes` is left unset (zero).
pub const DEFAULT_PASSES: u32 = 3;

/// Options controlling an approximate Gaussian blur.
///
/// # Examples
///
/// ```
/// use quickblur::BlurOptions;
///
/// let options = BlurOptions::new(1.1).with_passes(4);
/// assert_eq!(options.effective_passes(), 4);
///
/// // Unset passes fall back to the default of three.
/// assert_eq!(BlurOptions::new(1.1).effective_passes(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlurOptions {
    /// Standard deviation, in pixels, of the Gaussian being approximated.
    /// Zero leaves the image unchanged.
    pub std_dev: f64,
    /// Convolution passes per axis. Zero selects [`DEFAULT_PASSES`].
    pub passes: u32,
}

impl BlurOptions {
    /// Creates options with the given standard deviation and default passes.
    pub const fn new(std_dev: f64) -> Self {
        Self { std_dev, passes: 0 }
    }

    /// Sets the number of passes per axis.
    #[must_use]
    pub const fn with_passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    /// Number of passes actually run per axis.
    pub const fn effective_passes(&self) -> u32 {
        if self.passes == 0 {
            DEFAULT_PASSES
        } else {
            self.passes
        }
    }

    /// Checks that the standard deviation is finite and non-negative.
    pub fn validate(&self) -> Result<(), BlurError> {
        validate_std_dev(self.std_dev)
    }

    /// `true` when blurring with these options is the identity.
    pub fn is_identity(&self) -> bool {
        self.std_dev == 0.0
    }
}
