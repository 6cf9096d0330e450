/// File name the site serves for its root path.
pub const HOME_FILE: &str = "index.html";

/// File name of the page at `path`: the last `/`-separated segment, with an
/// empty path meaning the home page.
pub fn current_page_file(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    if file.is_empty() { HOME_FILE } else { file }
}

/// Whether a navigation link targets the page at `path`. Link targets are
/// normalized to their bare file name, so "/projects.html" and
/// "projects.html" refer to the same page, and the home file matches the
/// empty root path.
pub fn link_is_active(href: &str, path: &str) -> bool {
    let target = href.rsplit('/').next().unwrap_or(href);
    target == current_page_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_file_from_plain_name() {
        assert_eq!(current_page_file("projects.html"), "projects.html");
    }

    #[test]
    fn test_current_file_from_nested_path() {
        assert_eq!(current_page_file("/site/blog.html"), "blog.html");
    }

    #[test]
    fn test_empty_path_is_home() {
        assert_eq!(current_page_file(""), HOME_FILE);
        assert_eq!(current_page_file("/"), HOME_FILE);
    }

    #[test]
    fn test_matching_link_is_active() {
        assert!(link_is_active("projects.html", "projects.html"));
        assert!(link_is_active("/projects.html", "projects.html"));
    }

    #[test]
    fn test_home_link_matches_empty_path() {
        assert!(link_is_active("index.html", ""));
        assert!(link_is_active("index.html", "/"));
    }

    #[test]
    fn test_non_matching_link_is_inactive() {
        assert!(!link_is_active("blog.html", "projects.html"));
        assert!(!link_is_active("index.html", "contact.html"));
    }
}
