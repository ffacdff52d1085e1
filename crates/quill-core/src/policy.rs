//! Authorization policy - pure predicates over actor and resource owner.

use crate::domain::{Actor, Role};

/// True when `actor` may mutate a resource owned by `owner_id`: admins
/// may touch everything, authors only their own.
///
/// For comments the owner is the *post's* author; the caller resolves
/// that lookup before asking.
pub fn can_modify(actor: &Actor, owner_id: i64) -> bool {
    actor.role == Role::Admin || actor.id == owner_id
}
