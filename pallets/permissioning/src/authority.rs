//! Weighted-threshold checks over [`Authority`] values.
//!
//! Weights are summed as `u16` with checked arithmetic: an overflowing sum is
//! reported as [`AuthorityError::Overflow`] and never wraps.

use permissioning_primitives::{Authority, BlockSigningAuthority, PermissionLevel};
use sp_runtime::RuntimeDebug;

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum DelegatePolicy {
	/// The delegate plus everyone else must hit the threshold exactly.
	NewUser,
	/// The delegate plus everyone else must reach the threshold.
	EntityAuthority,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum AuthorityError {
	/// The delegate's actor is not among the authority's accounts.
	DelegateMissing,
	/// The delegate's actor is present under a different permission.
	PermissionMismatch,
	/// The delegate's actor is listed more than once.
	DuplicateDelegate,
	/// Keys and other accounts satisfy the threshold without the delegate.
	AlreadySatisfied,
	/// The combined weight misses the threshold the policy asks for.
	ThresholdNotReached,
	/// The threshold cannot be met by the authority's own weights.
	Unsatisfiable,
	Overflow,
}

/// Running sum of 16-bit weights.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, RuntimeDebug)]
pub struct WeightSum(u16);

impl WeightSum {
	pub fn checked_add(self, weight: u16) -> Result<Self, AuthorityError> {
		self.0.checked_add(weight).map(WeightSum).ok_or(AuthorityError::Overflow)
	}

	pub fn get(self) -> u16 {
		self.0
	}

	fn reaches(self, threshold: u32) -> bool {
		u32::from(self.0) >= threshold
	}
}

/// Checks that `delegate` is both necessary and sufficient for `auth`.
///
/// Every key weight and every account weight other than the delegate's is
/// summed into `others`. The delegate must appear exactly once, under
/// `delegate.permission`, `others` must stay below the threshold and
/// `others + delegate` must meet it as `policy` demands. Wait weights are not
/// counted.
pub fn validate_delegated_authority(
	auth: &Authority,
	delegate: &PermissionLevel,
	policy: DelegatePolicy,
) -> Result<(), AuthorityError> {
	let mut others = WeightSum::default();
	for key in &auth.keys {
		others = others.checked_add(key.weight)?;
	}

	let mut delegate_weight = None;
	for entry in &auth.accounts {
		if entry.permission.actor != delegate.actor {
			others = others.checked_add(entry.weight)?;
			continue;
		}
		if entry.permission.permission != delegate.permission {
			return Err(AuthorityError::PermissionMismatch);
		}
		if delegate_weight.replace(entry.weight).is_some() {
			return Err(AuthorityError::DuplicateDelegate);
		}
	}

	let delegate_weight = delegate_weight.ok_or(AuthorityError::DelegateMissing)?;
	if others.reaches(auth.threshold) {
		return Err(AuthorityError::AlreadySatisfied);
	}

	let combined = u32::from(others.checked_add(delegate_weight)?.get());
	let reached = match policy {
		DelegatePolicy::NewUser => combined == auth.threshold,
		DelegatePolicy::EntityAuthority => combined >= auth.threshold,
	};
	if reached {
		Ok(())
	} else {
		Err(AuthorityError::ThresholdNotReached)
	}
}

pub fn is_valid_delegated_authority(
	auth: &Authority,
	delegate: &PermissionLevel,
	policy: DelegatePolicy,
) -> bool {
	validate_delegated_authority(auth, delegate, policy).is_ok()
}

/// Checks that keys and accounts together can reach a non-zero threshold.
pub fn ensure_satisfiable(auth: &Authority) -> Result<(), AuthorityError> {
	if auth.threshold == 0 {
		return Err(AuthorityError::Unsatisfiable);
	}
	let mut total = WeightSum::default();
	for weight in auth.keys.iter().map(|k| k.weight).chain(auth.accounts.iter().map(|a| a.weight)) {
		total = total.checked_add(weight)?;
	}
	if total.reaches(auth.threshold) {
		Ok(())
	} else {
		Err(AuthorityError::Unsatisfiable)
	}
}

pub fn ensure_signing_authority(auth: &BlockSigningAuthority) -> Result<(), AuthorityError> {
	if auth.threshold == 0 || auth.keys.is_empty() {
		return Err(AuthorityError::Unsatisfiable);
	}
	let mut total = WeightSum::default();
	for key in &auth.keys {
		total = total.checked_add(key.weight)?;
	}
	if total.reaches(auth.threshold) {
		Ok(())
	} else {
		Err(AuthorityError::Unsatisfiable)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use permissioning_primitives::{permissions, KeyWeight, Name, PermissionLevelWeight, WaitWeight};
	use sp_core::ecdsa;

	const WRITER: Name = Name::from_static("writer");

	fn access() -> PermissionLevel {
		PermissionLevel::new(WRITER, permissions::ACCESS)
	}

	fn key(seed: u8, weight: u16) -> KeyWeight {
		KeyWeight { key: ecdsa::Public::from_raw([seed; 33]), weight }
	}

	fn account(actor: &str, permission: Name, weight: u16) -> PermissionLevelWeight {
		PermissionLevelWeight {
			permission: PermissionLevel::new(actor.parse().unwrap(), permission),
			weight,
		}
	}

	fn authority(threshold: u32, keys: Vec<KeyWeight>, accounts: Vec<PermissionLevelWeight>) -> Authority {
		Authority { threshold, keys, accounts, waits: Vec::new() }
	}

	#[test]
	fn delegate_alone_meets_threshold() {
		let auth = authority(1, vec![], vec![account("writer", permissions::ACCESS, 1)]);
		assert_eq!(validate_delegated_authority(&auth, &access(), DelegatePolicy::NewUser), Ok(()));
		assert!(is_valid_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority));
	}

	#[test]
	fn missing_delegate_is_rejected() {
		let auth = authority(1, vec![key(1, 1)], vec![account("alice", permissions::ACTIVE, 1)]);
		for policy in [DelegatePolicy::NewUser, DelegatePolicy::EntityAuthority] {
			assert_eq!(
				validate_delegated_authority(&auth, &access(), policy),
				Err(AuthorityError::DelegateMissing)
			);
		}
	}

	#[test]
	fn delegate_under_other_permission_is_rejected() {
		let auth = authority(1, vec![], vec![account("writer", permissions::ACTIVE, 1)]);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::NewUser),
			Err(AuthorityError::PermissionMismatch)
		);
	}

	#[test]
	fn delegate_listed_twice_is_rejected() {
		let auth = authority(
			2,
			vec![],
			vec![account("writer", permissions::ACCESS, 1), account("writer", permissions::ACCESS, 1)],
		);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority),
			Err(AuthorityError::DuplicateDelegate)
		);
	}

	#[test]
	fn authority_satisfied_without_delegate_is_rejected() {
		// a user key of weight 2 already meets threshold 2
		let auth = authority(2, vec![key(1, 2)], vec![account("writer", permissions::ACCESS, 1)]);
		for policy in [DelegatePolicy::NewUser, DelegatePolicy::EntityAuthority] {
			assert_eq!(
				validate_delegated_authority(&auth, &access(), policy),
				Err(AuthorityError::AlreadySatisfied)
			);
		}
	}

	#[test]
	fn threshold_zero_is_always_satisfied_without_delegate() {
		let auth = authority(0, vec![], vec![account("writer", permissions::ACCESS, 1)]);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority),
			Err(AuthorityError::AlreadySatisfied)
		);
	}

	#[test]
	fn policies_differ_on_overshoot() {
		// user key 1 + delegate 2 = 3 against threshold 2
		let auth = authority(2, vec![key(1, 1)], vec![account("writer", permissions::ACCESS, 2)]);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::NewUser),
			Err(AuthorityError::ThresholdNotReached)
		);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority),
			Ok(())
		);
	}

	#[test]
	fn shared_control_with_user_key_is_accepted() {
		let auth = authority(2, vec![key(1, 1)], vec![account("writer", permissions::ACCESS, 1)]);
		assert_eq!(validate_delegated_authority(&auth, &access(), DelegatePolicy::NewUser), Ok(()));
	}

	#[test]
	fn delegate_too_light_is_rejected() {
		let auth = authority(2, vec![], vec![account("writer", permissions::ACCESS, 1)]);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::NewUser),
			Err(AuthorityError::ThresholdNotReached)
		);
	}

	#[test]
	fn waits_do_not_count() {
		let mut auth = authority(2, vec![], vec![account("writer", permissions::ACCESS, 1)]);
		auth.waits.push(WaitWeight { wait_sec: 3600, weight: 1 });
		assert!(!is_valid_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority));
	}

	#[test]
	fn weight_overflow_fails_closed() {
		let auth = authority(
			u32::MAX,
			vec![key(1, u16::MAX), key(2, 1)],
			vec![account("writer", permissions::ACCESS, 1)],
		);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority),
			Err(AuthorityError::Overflow)
		);

		// others fit, others + delegate does not
		let auth = authority(
			u32::MAX,
			vec![key(1, u16::MAX)],
			vec![account("writer", permissions::ACCESS, 1)],
		);
		assert_eq!(
			validate_delegated_authority(&auth, &access(), DelegatePolicy::EntityAuthority),
			Err(AuthorityError::Overflow)
		);
	}

	#[test]
	fn satisfiable_authorities() {
		assert_eq!(ensure_satisfiable(&authority(2, vec![key(1, 1), key(2, 1)], vec![])), Ok(()));
		assert_eq!(
			ensure_satisfiable(&authority(3, vec![key(1, 1), key(2, 1)], vec![])),
			Err(AuthorityError::Unsatisfiable)
		);
		assert_eq!(ensure_satisfiable(&authority(0, vec![key(1, 1)], vec![])), Err(AuthorityError::Unsatisfiable));
		assert_eq!(
			ensure_satisfiable(&authority(1, vec![key(1, u16::MAX)], vec![account("alice", permissions::ACTIVE, 1)])),
			Err(AuthorityError::Overflow)
		);
	}

	#[test]
	fn signing_authority_needs_a_key() {
		let empty = BlockSigningAuthority { threshold: 1, keys: vec![] };
		assert_eq!(ensure_signing_authority(&empty), Err(AuthorityError::Unsatisfiable));
		let single = BlockSigningAuthority::single_key(ecdsa::Public::from_raw([7; 33]));
		assert_eq!(ensure_signing_authority(&single), Ok(()));
	}
}
