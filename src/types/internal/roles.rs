use std::collections::BTreeSet;

/// Closed enumeration of the role catalog
///
/// The fixed catalog is compiler-checkable; roles created outside it are
/// still carried as `Other` so an extended catalog round-trips instead of
/// being dropped.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Administrator,
    SalesManager,
    SalesUser,
    ReportingUser,
    Other(String),
}

impl Role {
    /// Map a stored role name onto the catalog
    pub fn from_name(name: &str) -> Self {
        match name {
            "Administrator" => Role::Administrator,
            "Sales Manager" => Role::SalesManager,
            "Sales User" => Role::SalesUser,
            "Reporting User" => Role::ReportingUser,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Role::Administrator => "Administrator",
            Role::SalesManager => "Sales Manager",
            Role::SalesUser => "Sales User",
            Role::ReportingUser => "Reporting User",
            Role::Other(name) => name,
        }
    }
}

/// The set of roles a principal holds
///
/// Backed by an ordered set: assignment order is not semantically
/// significant, and two principals with the same roles compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|r| r.name().to_string()).collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::collections::btree_set::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_round_trip() {
        for name in ["Administrator", "Sales Manager", "Sales User", "Reporting User"] {
            assert_eq!(Role::from_name(name).name(), name);
        }
    }

    #[test]
    fn unknown_role_is_carried_as_other() {
        let role = Role::from_name("Auditor");
        assert_eq!(role, Role::Other("Auditor".to_string()));
        assert_eq!(role.name(), "Auditor");
    }

    #[test]
    fn role_set_ignores_insertion_order() {
        let a: RoleSet = [Role::Administrator, Role::SalesManager]
            .into_iter()
            .collect();
        let b: RoleSet = [Role::SalesManager, Role::Administrator]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }
}
