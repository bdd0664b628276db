//! Helper macros which are not linked to the domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $name::$falsy => $name::$truthy,
                    $name::$truthy => $name::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $name::$truthy
                } else {
                    $name::$falsy
                }
            }
        }

        #[derive(Debug)]
        /// The character is not a valid letter for the direction
        pub struct $parse_err {
            failed: String,
        }

        impl fmt::Display for $parse_err {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($name::$truthy),
                    $false_ch => Ok($name::$falsy),
                    _ => {
                        debug!("rejected {} letter {:?}", stringify!($name), c);
                        Err($parse_err {
                            failed: c.to_string(),
                        })
                    }
                }
            }
        }

        impl $name {
            /// The single letter used in coordinate strings
            pub fn letter(self) -> char {
                match self {
                    $name::$truthy => $true_ch,
                    $name::$falsy => $false_ch,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.letter())
            }
        }
    };
}
