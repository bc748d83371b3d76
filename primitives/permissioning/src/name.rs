use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_std::{fmt, str::FromStr};

/// Longest textual form a name can take.
pub const MAX_NAME_LEN: usize = 13;

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// A 64-bit account, permission or action identifier.
///
/// The textual form uses the alphabet `.12345a-z`: the first twelve characters
/// take five bits each, the optional thirteenth takes the remaining four bits
/// and is therefore limited to `.1-5a-j`. Ordering follows the raw value.
#[derive(
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Encode,
	Decode,
	MaxEncodedLen,
	TypeInfo,
	Serialize,
	Deserialize,
)]
pub struct Name(pub u64);

#[derive(Clone, Copy, PartialEq, Eq, sp_runtime::RuntimeDebug)]
pub enum NameError {
	/// More than thirteen characters.
	TooLong,
	/// A character outside the name alphabet, or a thirteenth character above `j`.
	InvalidCharacter,
}

const fn char_value(c: u8) -> Option<u64> {
	match c {
		b'.' => Some(0),
		b'1'..=b'5' => Some((c - b'1') as u64 + 1),
		b'a'..=b'z' => Some((c - b'a') as u64 + 6),
		_ => None,
	}
}

impl Name {
	/// Parses the textual form of a name.
	pub const fn parse(text: &[u8]) -> Result<Name, NameError> {
		if text.len() > MAX_NAME_LEN {
			return Err(NameError::TooLong);
		}

		let mut value: u64 = 0;
		let mut i = 0;
		while i < text.len() {
			let c = match char_value(text[i]) {
				Some(c) => c,
				None => return Err(NameError::InvalidCharacter),
			};
			if i < MAX_NAME_LEN - 1 {
				value |= (c & 0x1f) << (64 - 5 * (i as u64 + 1));
			} else {
				if c > 0x0f {
					return Err(NameError::InvalidCharacter);
				}
				value |= c;
			}
			i += 1;
		}

		Ok(Name(value))
	}

	/// Builds a name from a literal. Meant for constants, where an invalid
	/// literal fails compilation.
	pub const fn from_static(text: &'static str) -> Name {
		match Self::parse(text.as_bytes()) {
			Ok(name) => name,
			Err(_) => panic!("invalid name literal"),
		}
	}

	pub const fn value(self) -> u64 {
		self.0
	}

	/// Writes the textual form into `buf` and returns its length with trailing
	/// dots trimmed.
	fn write_text(self, buf: &mut [u8; MAX_NAME_LEN]) -> usize {
		let mut rest = self.0;
		for i in 0..MAX_NAME_LEN {
			let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
			buf[MAX_NAME_LEN - 1 - i] = CHARMAP[(rest & mask) as usize];
			rest >>= shift;
		}

		let mut len = MAX_NAME_LEN;
		while len > 0 && buf[len - 1] == b'.' {
			len -= 1;
		}
		len
	}
}

impl From<u64> for Name {
	fn from(value: u64) -> Self {
		Name(value)
	}
}

impl From<Name> for u64 {
	fn from(name: Name) -> Self {
		name.0
	}
}

impl FromStr for Name {
	type Err = NameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Name::parse(s.as_bytes())
	}
}

impl TryFrom<&str> for Name {
	type Error = NameError;

	fn try_from(s: &str) -> Result<Self, Self::Error> {
		Name::parse(s.as_bytes())
	}
}

impl fmt::Display for Name {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut buf = [b'.'; MAX_NAME_LEN];
		let len = self.write_text(&mut buf);
		let text = sp_std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
		f.write_str(text)
	}
}

impl fmt::Debug for Name {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Name({})", self)
	}
}
