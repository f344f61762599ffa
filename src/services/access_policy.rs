//! Access policy - the single source of truth for task visibility and
//! per-action permissions.
//!
//! Every rule here is a pure function over a `Principal`; callers run the
//! queries and render the results, but never re-derive a decision. The
//! rules are deliberately exactly the reference behavior:
//!
//! - Administrator outranks Sales Manager (a principal holding both gets
//!   the Administrator scope).
//! - Sales Manager may view/edit ANY task, not just their own team's.
//!   The listing scope is narrower than the per-task grant; the asymmetry
//!   is intentional and pinned by tests.
//! - Roles outside the catalog (Reporting User included) fall through to
//!   own-tasks-only.

use crate::types::internal::{Principal, Role};

/// The set of tasks a principal may list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every task
    All,
    /// Tasks assigned to the manager's direct reports, plus the manager's own
    Team(i32),
    /// Only tasks assigned to the user
    Own(i32),
}

/// Compute the task visibility scope for a principal
pub fn scope_for(principal: &Principal) -> Scope {
    if principal.roles.contains(&Role::Administrator) {
        Scope::All
    } else if principal.roles.contains(&Role::SalesManager) {
        Scope::Team(principal.user_id)
    } else {
        Scope::Own(principal.user_id)
    }
}

/// Whether the principal may view a task assigned to `task_assigned_to`
pub fn can_view(principal: &Principal, task_assigned_to: i32) -> bool {
    principal.roles.contains(&Role::Administrator)
        || principal.roles.contains(&Role::SalesManager)
        || task_assigned_to == principal.user_id
}

/// Whether the principal may edit a task assigned to `task_assigned_to`
///
/// Same grant as viewing: the Sales Manager grant is unconditional, not
/// restricted to the manager's team.
pub fn can_edit(principal: &Principal, task_assigned_to: i32) -> bool {
    can_view(principal, task_assigned_to)
}

/// Whether the principal may delete tasks
///
/// Ownership is irrelevant for delete; only the role matters.
pub fn can_delete(principal: &Principal) -> bool {
    principal.roles.contains(&Role::Administrator)
        || principal.roles.contains(&Role::SalesManager)
}

/// Whether the principal may choose task assignees other than themselves
pub fn can_assign_others(principal: &Principal) -> bool {
    principal.roles.contains(&Role::Administrator)
        || principal.roles.contains(&Role::SalesManager)
}

/// Resolve the assignee for a new task
///
/// Administrators and Sales Managers may target anyone (defaulting to
/// themselves); every other role is silently forced to self, regardless of
/// the requested target.
pub fn resolve_assignee(principal: &Principal, requested: Option<i32>) -> i32 {
    if can_assign_others(principal) {
        requested.unwrap_or(principal.user_id)
    } else {
        principal.user_id
    }
}

/// Whether the principal may use the admin surface
pub fn can_manage_users(principal: &Principal) -> bool {
    principal.roles.contains(&Role::Administrator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::RoleSet;

    fn principal(user_id: i32, roles: &[Role]) -> Principal {
        Principal {
            user_id,
            username: format!("user{}", user_id),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{}@example.com", user_id),
            department: None,
            location: None,
            roles: roles.iter().cloned().collect(),
        }
    }

    #[test]
    fn administrator_scope_is_all() {
        let p = principal(1, &[Role::Administrator]);
        assert_eq!(scope_for(&p), Scope::All);
    }

    #[test]
    fn administrator_wins_over_sales_manager() {
        let p = principal(1, &[Role::SalesManager, Role::Administrator]);
        assert_eq!(scope_for(&p), Scope::All);
    }

    #[test]
    fn sales_manager_scope_is_own_team() {
        let p = principal(2, &[Role::SalesManager]);
        assert_eq!(scope_for(&p), Scope::Team(2));
    }

    #[test]
    fn sales_user_scope_is_own_tasks() {
        let p = principal(4, &[Role::SalesUser]);
        assert_eq!(scope_for(&p), Scope::Own(4));
    }

    #[test]
    fn reporting_user_falls_through_to_own() {
        // The role's description promises read-only reporting, but the
        // reference never implements it; visibility-wise it behaves
        // exactly like Sales User.
        let p = principal(8, &[Role::ReportingUser]);
        assert_eq!(scope_for(&p), Scope::Own(8));
    }

    #[test]
    fn unknown_role_falls_through_to_own() {
        let p = principal(9, &[Role::Other("Auditor".to_string())]);
        assert_eq!(scope_for(&p), Scope::Own(9));
    }

    #[test]
    fn no_roles_means_own_scope_and_no_grants() {
        let p = principal(7, &[]);
        assert_eq!(scope_for(&p), Scope::Own(7));
        assert!(!can_delete(&p));
        assert!(!can_manage_users(&p));
        assert!(can_view(&p, 7));
        assert!(!can_view(&p, 8));
    }

    #[test]
    fn sales_manager_can_edit_any_task() {
        // Broader than the Team listing scope: the grant is unconditional,
        // even for a task assigned to someone outside the manager's team.
        let p = principal(2, &[Role::SalesManager]);
        assert!(can_edit(&p, 999));
        assert!(can_view(&p, 999));
    }

    #[test]
    fn assignee_can_view_and_edit_own_task() {
        let p = principal(4, &[Role::SalesUser]);
        assert!(can_view(&p, 4));
        assert!(can_edit(&p, 4));
        assert!(!can_view(&p, 5));
        assert!(!can_edit(&p, 5));
    }

    #[test]
    fn delete_requires_admin_or_manager_regardless_of_ownership() {
        assert!(can_delete(&principal(1, &[Role::Administrator])));
        assert!(can_delete(&principal(2, &[Role::SalesManager])));
        // Owning the task does not help
        assert!(!can_delete(&principal(4, &[Role::SalesUser])));
        assert!(!can_delete(&principal(8, &[Role::ReportingUser])));
    }

    #[test]
    fn sales_user_assignment_is_forced_to_self() {
        let p = principal(4, &[Role::SalesUser]);
        // Requested target is silently overridden, not rejected
        assert_eq!(resolve_assignee(&p, Some(5)), 4);
        assert_eq!(resolve_assignee(&p, None), 4);
    }

    #[test]
    fn privileged_roles_may_assign_to_anyone() {
        let admin = principal(1, &[Role::Administrator]);
        assert_eq!(resolve_assignee(&admin, Some(5)), 5);
        assert_eq!(resolve_assignee(&admin, None), 1);

        let manager = principal(2, &[Role::SalesManager]);
        assert_eq!(resolve_assignee(&manager, Some(4)), 4);
    }

    #[test]
    fn only_administrators_manage_users() {
        assert!(can_manage_users(&principal(1, &[Role::Administrator])));
        assert!(!can_manage_users(&principal(2, &[Role::SalesManager])));
        assert!(!can_manage_users(&principal(4, &[Role::SalesUser])));
    }
}
