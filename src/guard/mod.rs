//! Route guard: redirect policy enforcing session and role preconditions
//! per screen, plus the role-conditional navigation links. Everything here
//! is a pure function of the current [`Session`].

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Catalog,
    MovieDetails,
    AdminDashboard,
    Logout,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Catalog => "/movies",
            Page::MovieDetails => "/movies/:id",
            Page::AdminDashboard => "/adminDashboard",
            Page::Logout => "/logout",
        }
    }
}

/// Where navigation to `page` should land instead, if anywhere.
///
/// Login and Register require the absent state. The catalog screens
/// require a session, and the admin dashboard (covering the add, edit and
/// delete operations) additionally requires the administrator role.
pub fn redirect(page: Page, session: &Session) -> Option<Page> {
    match page {
        Page::Login if !session.is_absent() => Some(Page::Home),
        Page::Register if !session.is_absent() => Some(Page::Catalog),
        Page::Catalog | Page::MovieDetails if session.is_absent() => Some(Page::Login),
        Page::AdminDashboard if session.is_absent() => Some(Page::Login),
        Page::AdminDashboard if !session.admin() => Some(Page::Catalog),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

impl NavLink {
    fn new(label: &'static str, page: Page) -> Self {
        Self { label, page }
    }
}

/// Navigation shell contents for the given session. Admins get a "Movies"
/// link pointing at the dashboard instead of the browsing catalog.
pub fn nav_links(session: &Session) -> Vec<NavLink> {
    let mut links = vec![NavLink::new("Home", Page::Home)];

    if !session.is_absent() {
        if session.admin() {
            links.push(NavLink::new("Movies", Page::AdminDashboard));
        } else {
            links.push(NavLink::new("Movies", Page::Catalog));
        }
        links.push(NavLink::new("Logout", Page::Logout));
    } else {
        links.push(NavLink::new("Register", Page::Register));
        links.push(NavLink::new("Login", Page::Login));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absent() -> Session {
        Session::absent()
    }

    fn user() -> Session {
        Session {
            id: Some("u1".into()),
            is_admin: Some(false),
            email: Some("a@b.com".into()),
        }
    }

    fn admin() -> Session {
        Session {
            is_admin: Some(true),
            ..user()
        }
    }

    #[test]
    fn login_redirects_away_when_logged_in() {
        assert_eq!(redirect(Page::Login, &absent()), None);
        assert_eq!(redirect(Page::Login, &user()), Some(Page::Home));
        assert_eq!(redirect(Page::Register, &user()), Some(Page::Catalog));
    }

    #[test]
    fn session_required_pages_redirect_to_login() {
        for page in [Page::Catalog, Page::MovieDetails, Page::AdminDashboard] {
            assert_eq!(redirect(page, &absent()), Some(Page::Login));
        }
        assert_eq!(redirect(Page::Catalog, &user()), None);
        assert_eq!(redirect(Page::MovieDetails, &user()), None);
    }

    #[test]
    fn admin_dashboard_requires_role() {
        assert_eq!(redirect(Page::AdminDashboard, &user()), Some(Page::Catalog));
        assert_eq!(redirect(Page::AdminDashboard, &admin()), None);
    }

    #[test]
    fn home_and_logout_never_redirect() {
        for session in [absent(), user(), admin()] {
            assert_eq!(redirect(Page::Home, &session), None);
            assert_eq!(redirect(Page::Logout, &session), None);
        }
    }

    #[test]
    fn nav_links_for_logged_out() {
        let labels: Vec<_> = nav_links(&absent()).iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Register", "Login"]);
    }

    #[test]
    fn nav_links_point_movies_at_catalog_for_users() {
        let links = nav_links(&user());
        let movies = links.iter().find(|l| l.label == "Movies").unwrap();
        assert_eq!(movies.page, Page::Catalog);
        assert!(links.iter().any(|l| l.label == "Logout"));
    }

    #[test]
    fn nav_links_point_movies_at_dashboard_for_admins() {
        let links = nav_links(&admin());
        let movies = links.iter().find(|l| l.label == "Movies").unwrap();
        assert_eq!(movies.page, Page::AdminDashboard);
    }
}
