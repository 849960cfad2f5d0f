#[cfg(feature = "error-track_caller")]
use core::panic::Location;

/// The Kind of Error
///
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An Error that does not fall into any other category.
    Other,
    Unsupported,
    InvalidInput,
    InvalidData,
    /// A bound passed to a ranged extraction was negative, or the range was empty.
    InvalidBound,
    /// Deriving the initial seed failed. The failure reported by the key derivation
    /// step is available through [`core::error::Error::source`] when `alloc` is enabled.
    Initialization,

    #[doc(hidden)]
    __Internal,
    #[doc(hidden)]
    __Uncategorized,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::Other => f.write_str("Other Error"),
            ErrorKind::Unsupported => f.write_str("Unsupported Operation"),
            ErrorKind::InvalidInput => f.write_str("Invalid Input"),
            ErrorKind::InvalidData => f.write_str("Invalid Data"),
            ErrorKind::InvalidBound => f.write_str("Invalid Bound"),
            ErrorKind::Initialization => f.write_str("Initialization Failed"),
            ErrorKind::__Internal => f.write_str("Internal Error (Please Report a bug)"),
            ErrorKind::__Uncategorized => f.write_str("(uncategorized error)"),
        }
    }
}

#[derive(Debug)]
enum ErrorInner {
    None,
    #[cfg(feature = "alloc")]
    Custom(alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>),
    Message(&'static str),
    OsError(i32),
}

/// The type of errors returned from the seedchain crates.
///
/// ## Traits
/// The type implements [`core::error::Error`]. This allows converting it to many other error types.
///
#[cfg_attr(
    feature = "std",
    doc = "When the `std` feature is available, [`From<Error>`] is implemented for [`std::io::Error`]. The conversion is lossy."
)]
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: ErrorInner,
    #[cfg(feature = "error-track_caller")]
    #[allow(dead_code)] // Only used by `Debug`
    error_location: &'static Location<'static>,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.kind.fmt(f)?;

        match &self.inner {
            ErrorInner::None => Ok(()),
            #[cfg(feature = "alloc")]
            ErrorInner::Custom(inner) => {
                f.write_str(": ")?;
                inner.fmt(f)
            }
            ErrorInner::Message(msg) => {
                f.write_str(": ")?;
                f.write_str(msg)
            }
            ErrorInner::OsError(i) => f.write_fmt(format_args!(" (os error {i})")),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.inner {
            #[cfg(feature = "alloc")]
            ErrorInner::Custom(inner) => Some(&**inner),
            _ => None,
        }
    }
}

impl Error {
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    fn from_kind_and_payload(kind: ErrorKind, inner: ErrorInner) -> Self {
        Self {
            kind,
            inner,
            #[cfg(feature = "error-track_caller")]
            error_location: Location::caller(),
        }
    }

    /// Constructs a new error with the specified `kind` and the specified `payload`.
    ///
    /// Note that this function allocates (even if the payload is a string).
    /// If you do not need a payload, convert from [`ErrorKind`] instead.
    /// If your payload is a string literal, use [`Error::new_with_message`] instead.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "nightly-docs", doc(cfg(feature = "alloc")))]
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    pub fn new<E: Into<alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>>>(
        kind: ErrorKind,
        payload: E,
    ) -> Self {
        Self::from_kind_and_payload(kind, ErrorInner::Custom(payload.into()))
    }

    /// Constructs a new error with the specified `kind` and the specified `msg`.
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    pub fn new_with_message(kind: ErrorKind, msg: &'static str) -> Self {
        Self::from_kind_and_payload(kind, ErrorInner::Message(msg))
    }

    /// Wraps a failure from the key derivation step as an [`ErrorKind::Initialization`] error.
    ///
    /// The wrapped error is kept as the [`source`][core::error::Error::source] of the result.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "nightly-docs", doc(cfg(feature = "alloc")))]
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    pub fn initialization(cause: Error) -> Self {
        Self::new(ErrorKind::Initialization, cause)
    }

    /// Constructs a new error from a raw os error.
    ///
    /// Raw os errors are not mapped to a more specific kind.
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    pub fn from_raw_os_error(errno: i32) -> Self {
        Self::from_kind_and_payload(ErrorKind::__Uncategorized, ErrorInner::OsError(errno))
    }

    /// Constructs a new error the specified `msg` that indicates an [`ErrorKind::Other`] error.
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    pub fn other_with_message(msg: &'static str) -> Self {
        Self::from_kind_and_payload(ErrorKind::Other, ErrorInner::Message(msg))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the raw OS Error.
    ///
    /// If the function was constructed with [`Error::from_raw_os_error`], returns the input value.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self.inner {
            ErrorInner::OsError(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the static message this error was constructed with, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self.inner {
            ErrorInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Attempts to downcast the payload to `E`.
    ///
    /// Returns [`Ok`] if the payload is of type `E`, and [`Err`] with `self` otherwise.
    /// For an [`ErrorKind::Initialization`] error, `E = Error` yields the derivation failure.
    pub fn downcast<E: core::error::Error + Send + Sync + 'static>(
        self,
    ) -> core::result::Result<E, Self> {
        match self.inner {
            #[cfg(feature = "alloc")]
            ErrorInner::Custom(n) => match n.downcast() {
                Ok(b) => Ok(*b),
                Err(e) => Err(Self {
                    kind: self.kind,
                    inner: ErrorInner::Custom(e),
                    #[cfg(feature = "error-track_caller")]
                    error_location: self.error_location,
                }),
            },
            _ => Err(self),
        }
    }
}

impl From<ErrorKind> for Error {
    #[cfg_attr(feature = "error-track_caller", track_caller)]
    fn from(value: ErrorKind) -> Self {
        Error::from_kind_and_payload(value, ErrorInner::None)
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
#[cfg_attr(feature = "nightly-docs", doc(cfg(feature = "std")))]
impl From<ErrorKind> for std::io::ErrorKind {
    fn from(value: ErrorKind) -> Self {
        match value {
            ErrorKind::Unsupported => Self::Unsupported,
            ErrorKind::InvalidInput | ErrorKind::InvalidBound => Self::InvalidInput,
            ErrorKind::InvalidData => Self::InvalidData,
            ErrorKind::Other
            | ErrorKind::Initialization
            | ErrorKind::__Internal
            | ErrorKind::__Uncategorized => Self::Other,
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "nightly-docs", doc(cfg(feature = "std")))]
impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        let kind: std::io::ErrorKind = value.kind.into();

        if let Some(os_err) = value.raw_os_error() {
            Self::from_raw_os_error(os_err)
        } else {
            Self::new(kind, value)
        }
    }
}
