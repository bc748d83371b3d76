//! The seam between the pallet and the runtime that owns accounts, permissions
//! and resource limits.

use codec::{Decode, Encode};
use frame_support::pallet_prelude::DispatchResult;
use permissioning_primitives::{Authority, Name, ProducerKey};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

use crate::{
	types::{ChainParameters, FeatureDigest, ResourceLimits},
	LOG_TARGET,
};

/// A request the pallet makes of the host runtime.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub enum HostCommand {
	NewAccount { creator: Name, name: Name, owner: Authority, active: Authority },
	/// Creates or replaces `account@permission`.
	UpdateAuth { account: Name, permission: Name, parent: Name, auth: Authority },
	DeleteAuth { account: Name, permission: Name },
	/// Requires `account@requirement` for `code::action` when `account` signs.
	LinkAuth { account: Name, code: Name, action: Name, requirement: Name },
	UnlinkAuth { account: Name, code: Name, action: Name },
	SetResourceLimits { account: Name, limits: ResourceLimits },
	SetPrivileged { account: Name, privileged: bool },
	ProposeSchedule { producers: Vec<ProducerKey> },
	SetParams { params: ChainParameters },
	/// Schedules a protocol feature for activation in the next block.
	ActivateFeature { digest: FeatureDigest },
}

/// Implemented by the runtime to carry out [`HostCommand`]s.
pub trait PermissionHost {
	fn account_exists(account: Name) -> bool;

	fn is_feature_activated(digest: &FeatureDigest) -> bool;

	/// `None` when the account is unknown.
	fn resource_limits(account: Name) -> Option<ResourceLimits>;

	/// Executes one request. Errors abort the calling dispatchable.
	fn execute(command: &HostCommand) -> DispatchResult;
}

/// Invoked by the host whenever it creates an account.
pub trait NewAccountHook {
	fn on_new_account(
		creator: Name,
		account: Name,
		owner: &Authority,
		active: &Authority,
	) -> DispatchResult;
}

/// Host requests collected during a call, executed in issue order.
#[derive(Clone, Default, Eq, PartialEq, RuntimeDebug)]
pub struct CommandBatch {
	commands: Vec<HostCommand>,
}

impl CommandBatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, command: HostCommand) {
		self.commands.push(command);
	}

	/// Runs every request against `H`, stopping at the first failure.
	pub fn execute<H: PermissionHost>(self) -> DispatchResult {
		let total = self.commands.len();
		for (index, command) in self.commands.iter().enumerate() {
			if let Err(e) = H::execute(command) {
				log::warn!(
					target: LOG_TARGET,
					"host rejected request {}/{}: {:?} ({:?})",
					index + 1,
					total,
					command,
					e,
				);
				return Err(e);
			}
		}
		log::debug!(target: LOG_TARGET, "executed {} host requests", total);
		Ok(())
	}
}
