//! Maintenance of the two writer capabilities: `entity@writer` over an
//! entity's writer nodes, and `writer@access` over every writer entity.

use frame_support::{ensure, pallet_prelude::DispatchResult, traits::Get};
use permissioning_primitives::{actions, permissions, Authority, Name, PermissionLevel};

use crate::{
	authority, CommandBatch, Config, Error, Event, HostCommand, Pallet, WriterAuthorityRecord,
	WriterRecords, LOG_TARGET,
};

/// Weight of every delegate in a writer record.
const DELEGATE_WEIGHT: u16 = 1;

impl<T: Config> Pallet<T> {
	/// `(code, action)` pairs an entity runs under its `writer` permission.
	pub(crate) fn writer_actions() -> [(Name, Name); 3] {
		let system = T::SystemAccount::get();
		[
			(system, actions::NEW_ACCOUNT),
			(system, actions::SET_RAM),
			(T::WriterAccount::get(), actions::RUN),
		]
	}

	/// A writer node's authority must be satisfiable on its own and must not
	/// lean on the global capability it becomes part of.
	pub(crate) fn ensure_writer_authority(auth: &Authority) -> DispatchResult {
		authority::ensure_satisfiable(auth).map_err(Error::<T>::from)?;
		let writer = T::WriterAccount::get();
		ensure!(
			auth.accounts.iter().all(|a| a.permission.actor != writer),
			Error::<T>::InvalidAuthority
		);
		Ok(())
	}

	pub(crate) fn register_writer(
		entity: Name,
		node: Name,
		auth: Authority,
		batch: &mut CommandBatch,
	) {
		batch.push(HostCommand::UpdateAuth {
			account: entity,
			permission: node,
			parent: permissions::ACTIVE,
			auth,
		});

		let mut record = WriterRecords::<T>::get(entity).unwrap_or_default();
		if record.insert(PermissionLevel::new(entity, node), DELEGATE_WEIGHT).is_changed() {
			Self::publish_entity_record(entity, record, batch);
		}

		let system = T::SystemAccount::get();
		let mut global = WriterRecords::<T>::get(system).unwrap_or_default();
		let delegate = PermissionLevel::new(entity, permissions::WRITER);
		if global.insert(delegate, DELEGATE_WEIGHT).is_changed() {
			batch.push(HostCommand::UpdateAuth {
				account: T::WriterAccount::get(),
				permission: permissions::ACCESS,
				parent: permissions::ACTIVE,
				auth: global.to_authority(),
			});
			WriterRecords::<T>::insert(system, global);

			for (code, action) in Self::writer_actions() {
				batch.push(HostCommand::LinkAuth {
					account: entity,
					code,
					action,
					requirement: permissions::WRITER,
				});
			}

			log::info!(target: LOG_TARGET, "{} joined writer@access", entity);
			Self::deposit_event(Event::WriterCapabilityGranted { entity });
		}
	}

	pub(crate) fn deregister_writer(entity: Name, node: Name, batch: &mut CommandBatch) {
		let mut record = WriterRecords::<T>::get(entity).unwrap_or_default();
		if record.remove(&PermissionLevel::new(entity, node)).is_changed() {
			if record.is_empty() {
				WriterRecords::<T>::remove(entity);
				Self::revoke_writer_capability(entity, batch);
			} else {
				Self::publish_entity_record(entity, record, batch);
			}
		}

		batch.push(HostCommand::DeleteAuth { account: entity, permission: node });
	}

	/// Takes `entity@writer` out of `writer@access`, unlinks the writer
	/// actions and deletes the permission. The entity record must already be
	/// gone from storage.
	pub(crate) fn revoke_writer_capability(entity: Name, batch: &mut CommandBatch) {
		let system = T::SystemAccount::get();
		let writer = T::WriterAccount::get();
		let delegate = PermissionLevel::new(entity, permissions::WRITER);

		let mut global = WriterRecords::<T>::get(system).unwrap_or_default();
		if global.remove(&delegate).is_changed() {
			if global.is_empty() {
				WriterRecords::<T>::remove(system);
				batch.push(HostCommand::DeleteAuth { account: writer, permission: permissions::ACCESS });
			} else {
				batch.push(HostCommand::UpdateAuth {
					account: writer,
					permission: permissions::ACCESS,
					parent: permissions::ACTIVE,
					auth: global.to_authority(),
				});
				WriterRecords::<T>::insert(system, global);
			}
		}

		for (code, action) in Self::writer_actions() {
			batch.push(HostCommand::UnlinkAuth { account: entity, code, action });
		}
		batch.push(HostCommand::DeleteAuth { account: entity, permission: permissions::WRITER });

		log::info!(target: LOG_TARGET, "{} left writer@access", entity);
		Self::deposit_event(Event::WriterCapabilityRevoked { entity });
	}

	fn publish_entity_record(entity: Name, record: WriterAuthorityRecord, batch: &mut CommandBatch) {
		batch.push(HostCommand::UpdateAuth {
			account: entity,
			permission: permissions::WRITER,
			parent: permissions::ACTIVE,
			auth: record.to_authority(),
		});
		WriterRecords::<T>::insert(entity, record);
	}
}
