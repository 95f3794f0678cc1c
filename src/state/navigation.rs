//! Navigation-related state types.
//!
//! Which screen set renders is a pure function of the authentication phase;
//! these types only describe positions within the active set.

use crate::models::HiveStatus;

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Drawer,
    View,
}

/// Specifying the different views.
///
/// The first four belong to the unauthenticated stack (entry: Login); the
/// rest to the authenticated drawer set (entry: Home). `ApiaryDetail` and
/// `HiveDetail` are reachable only through selection, never from the drawer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Login,
    Register,
    ForgotPassword,
    NewPassword,
    Home,
    Apiaries,
    ApiaryDetail,
    HiveDetail,
    Harvest,
    Settings,
    Profile,
}

/// Specifying the drawer items of the authenticated screen set.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DrawerItem {
    Home,
    Apiaries,
    Harvest,
    Settings,
    Profile,
}

impl DrawerItem {
    pub const ALL: [DrawerItem; 5] = [
        DrawerItem::Home,
        DrawerItem::Apiaries,
        DrawerItem::Harvest,
        DrawerItem::Settings,
        DrawerItem::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DrawerItem::Home => "Home",
            DrawerItem::Apiaries => "Apiaries",
            DrawerItem::Harvest => "Harvest",
            DrawerItem::Settings => "Settings",
            DrawerItem::Profile => "Profile",
        }
    }

    pub fn view(&self) -> View {
        match self {
            DrawerItem::Home => View::Home,
            DrawerItem::Apiaries => View::Apiaries,
            DrawerItem::Harvest => View::Harvest,
            DrawerItem::Settings => View::Settings,
            DrawerItem::Profile => View::Profile,
        }
    }
}

/// Specifying the hive filter tabs on the apiary detail view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HiveFilter {
    All,
    Active,
    Critical,
    Dead,
}

impl HiveFilter {
    pub const ALL: [HiveFilter; 4] = [
        HiveFilter::All,
        HiveFilter::Active,
        HiveFilter::Critical,
        HiveFilter::Dead,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HiveFilter::All => "All",
            HiveFilter::Active => "Active",
            HiveFilter::Critical => "Critical",
            HiveFilter::Dead => "Dead",
        }
    }

    pub fn matches(&self, status: HiveStatus) -> bool {
        match self {
            HiveFilter::All => true,
            HiveFilter::Active => status == HiveStatus::Active,
            HiveFilter::Critical => status == HiveStatus::Critical,
            HiveFilter::Dead => status == HiveStatus::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_items_map_to_views() {
        assert_eq!(DrawerItem::Home.view(), View::Home);
        assert_eq!(DrawerItem::Apiaries.view(), View::Apiaries);
        assert_eq!(DrawerItem::Harvest.view(), View::Harvest);
        assert_eq!(DrawerItem::Settings.view(), View::Settings);
        assert_eq!(DrawerItem::Profile.view(), View::Profile);
    }

    #[test]
    fn test_detail_views_have_no_drawer_item() {
        for item in DrawerItem::ALL {
            assert_ne!(item.view(), View::ApiaryDetail);
            assert_ne!(item.view(), View::HiveDetail);
        }
    }

    #[test]
    fn test_hive_filter_matches() {
        assert!(HiveFilter::All.matches(HiveStatus::Dead));
        assert!(HiveFilter::Active.matches(HiveStatus::Active));
        assert!(!HiveFilter::Active.matches(HiveStatus::Critical));
        assert!(HiveFilter::Critical.matches(HiveStatus::Critical));
        assert!(HiveFilter::Dead.matches(HiveStatus::Dead));
        assert!(!HiveFilter::Dead.matches(HiveStatus::Active));
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(HiveFilter::All.label(), "All");
        assert_eq!(HiveFilter::Dead.label(), "Dead");
    }
}
