use pretty_assertions::assert_eq;
use shared_types::{has_permission, menu_for_role, Role, BASE_MENU};

#[test]
fn test_every_role_sees_the_dashboard() {
    for role in Role::ALL {
        let menu = menu_for_role(Some(role));
        assert!(
            menu.iter().any(|item| item.path == "/dashboard"),
            "{role} lost the dashboard entry"
        );
    }
    // So does a session whose role the client does not recognize.
    assert!(menu_for_role(None)
        .iter()
        .any(|item| item.path == "/dashboard"));
}

#[test]
fn test_rendered_menu_never_exceeds_permissions() {
    for role in Role::ALL {
        for item in menu_for_role(Some(role)) {
            if let Some(required) = item.permission {
                assert!(
                    has_permission(Some(role), required),
                    "{role} shows '{}' without {}",
                    item.label,
                    required.as_str()
                );
            }
        }
    }
}

#[test]
fn test_menus_are_disjoint_across_roles() {
    // Apart from the shared base items, no two roles link to the same
    // path; each area belongs to exactly one role.
    let base: Vec<&str> = BASE_MENU.iter().map(|i| i.path).collect();
    for a in Role::ALL {
        for b in Role::ALL {
            if a == b {
                continue;
            }
            for item in menu_for_role(Some(a)) {
                if base.contains(&item.path) {
                    continue;
                }
                assert!(
                    !menu_for_role(Some(b)).iter().any(|o| o.path == item.path),
                    "{} is shared between {a} and {b}",
                    item.path
                );
            }
        }
    }
}

#[test]
fn test_admin_menu_is_the_widest() {
    let admin_len = menu_for_role(Some(Role::Admin)).len();
    for role in Role::ALL {
        assert!(menu_for_role(Some(role)).len() <= admin_len);
    }
}

#[test]
fn test_menu_paths_are_absolute_and_lowercase() {
    for role in Role::ALL {
        for item in menu_for_role(Some(role)) {
            assert!(item.path.starts_with('/'), "{} is relative", item.path);
            assert_eq!(item.path, item.path.to_lowercase());
            assert!(!item.path.ends_with('/'));
        }
    }
}
