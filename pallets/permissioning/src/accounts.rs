use frame_support::{ensure, pallet_prelude::*};
use permissioning_primitives::{permissions, Authority, Name, PermissionLevel};

use crate::{
	authority::{validate_delegated_authority, DelegatePolicy},
	CommandBatch, Config, Entities, Error, HostCommand, NewAccountHook, NodeKind, Nodes, Pallet,
	WriterRecords, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
	/// Writer nodes, and entities holding the writer capability, create user
	/// accounts.
	pub(crate) fn can_create_users(creator: Name) -> bool {
		match Nodes::<T>::get(creator) {
			Some(node) => node.kind == NodeKind::Writer,
			None => Entities::<T>::contains_key(creator) && WriterRecords::<T>::contains_key(creator),
		}
	}

	fn check_delegate(auth: &Authority, delegate: PermissionLevel, policy: DelegatePolicy) -> DispatchResult {
		validate_delegated_authority(auth, &delegate, policy).map_err(|e| {
			log::debug!(target: LOG_TARGET, "authority rejected for {:?}: {:?}", delegate, e);
			Error::<T>::from(e).into()
		})
	}
}

impl<T: Config> NewAccountHook for Pallet<T> {
	/// Accounts made by the system account must be declared entities or
	/// validators, and get their resource limits seeded. Every other account is
	/// a user account, which must stay under the control of `writer@access`.
	fn on_new_account(
		creator: Name,
		account: Name,
		owner: &Authority,
		active: &Authority,
	) -> DispatchResult {
		if creator != T::SystemAccount::get() {
			ensure!(Self::can_create_users(creator), Error::<T>::CreatorNotAllowed);

			let access = PermissionLevel::new(T::WriterAccount::get(), permissions::ACCESS);
			Self::check_delegate(owner, access, DelegatePolicy::NewUser)?;
			Self::check_delegate(active, access, DelegatePolicy::NewUser)?;

			log::info!(target: LOG_TARGET, "user account {} created by {}", account, creator);
			return Ok(());
		}

		let limits = if Entities::<T>::contains_key(account) {
			T::EntityResourceLimits::get()
		} else {
			let node = Nodes::<T>::get(account)
				.filter(|node| node.kind == NodeKind::Validator)
				.ok_or(Error::<T>::UndeclaredAccount)?;
			Self::check_delegate(
				owner,
				PermissionLevel::new(node.entity, permissions::OWNER),
				DelegatePolicy::EntityAuthority,
			)?;
			Self::check_delegate(
				active,
				PermissionLevel::new(node.entity, permissions::ACTIVE),
				DelegatePolicy::EntityAuthority,
			)?;
			T::ValidatorResourceLimits::get()
		};

		let mut batch = CommandBatch::new();
		batch.push(HostCommand::SetResourceLimits { account, limits });
		batch.execute::<T::Host>()
	}
}
