//! Base64 encoding and decoding.
//!
//! Implements the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding.
//!
//! ```
//! let encoded = b64::encode(b"foobar");
//! assert_eq!(encoded, "Zm9vYmFy");
//! assert_eq!(b64::decode(&encoded).unwrap(), b"foobar");
//! ```

mod alphabet;
mod encoding;

pub use alphabet::{ALPHABET, PAD, is_valid_char};
pub use encoding::{DecodeError, decode, decoded_size, encode, encoded_size};
