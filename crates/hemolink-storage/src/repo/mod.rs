//! Entity repositories.
//!
//! Each repository owns a pool handle and exposes the create/read/delete
//! operations the API serves. Join queries alias every column with a
//! per-table prefix so one row can be unpacked into nested entities.

mod blood_requests;
mod donations;
mod donor_pledges;
mod donor_profiles;
mod users;

pub use blood_requests::BloodRequestRepo;
pub use donations::DonationRepo;
pub use donor_pledges::DonorPledgeRepo;
pub use donor_profiles::DonorProfileRepo;
pub use users::UserRepo;

/// Render a `SELECT` column list as `alias.field AS prefixfield, ...`.
pub(crate) fn select_list(alias: &str, prefix: &str, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("{alias}.{field} AS {prefix}{field}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_list_prefixes_every_field() {
        let list = select_list("u", "u_", &["user_id", "email"]);
        assert_eq!(list, "u.user_id AS u_user_id, u.email AS u_email");
    }

    #[test]
    fn test_select_list_empty_prefix() {
        let list = select_list("users", "", &["user_id"]);
        assert_eq!(list, "users.user_id AS user_id");
    }
}
