use frame_support::{ensure, pallet_prelude::*};
use permissioning_primitives::Name;

use crate::{
	CommandBatch, Config, Entities, Error, HostCommand, Nodes, Pallet, PermissionHost,
	ResourceLimits, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
	/// A user account is anything the pallet does not manage itself.
	pub(crate) fn is_user_account(account: Name) -> bool {
		account != T::SystemAccount::get() &&
			account != T::WriterAccount::get() &&
			!Entities::<T>::contains_key(account) &&
			!Nodes::<T>::contains_key(account)
	}

	/// Queues the limit updates moving `bytes` of RAM from `entity` to
	/// `account`. Net and CPU weights are left as they are.
	pub(crate) fn transfer_ram(
		entity: Name,
		account: Name,
		bytes: i64,
		batch: &mut CommandBatch,
	) -> DispatchResult {
		ensure!(Entities::<T>::contains_key(entity), Error::<T>::EntityNotFound);
		ensure!(bytes > 0, Error::<T>::InvalidRamAmount);
		ensure!(Self::is_user_account(account), Error::<T>::NotAUserAccount);

		let from = T::Host::resource_limits(entity).ok_or(Error::<T>::AccountNotFound)?;
		let to = T::Host::resource_limits(account).ok_or(Error::<T>::AccountNotFound)?;
		ensure!(from.is_ram_metered() && to.is_ram_metered(), Error::<T>::UnmeteredAccount);
		ensure!(from.ram_bytes >= bytes, Error::<T>::InsufficientRam);

		let to_ram = to.ram_bytes.checked_add(bytes).ok_or(Error::<T>::ArithmeticOverflow)?;

		batch.push(HostCommand::SetResourceLimits {
			account: entity,
			limits: ResourceLimits { ram_bytes: from.ram_bytes - bytes, ..from },
		});
		batch.push(HostCommand::SetResourceLimits {
			account,
			limits: ResourceLimits { ram_bytes: to_ram, ..to },
		});

		log::info!(target: LOG_TARGET, "{} gives {} bytes of RAM to {}", entity, bytes, account);
		Ok(())
	}
}
