//! Static portfolio content: the pages, gallery, posts, and project cards
//! the viewer presents. Read-only at runtime.

/// The viewer's pages, in navigation order. `href` keeps the published
/// site's page file names so the active-link rules match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Projects,
    Blog,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::Projects, PageId::Blog, PageId::Contact];

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Projects => "Projects",
            PageId::Blog => "Blog",
            PageId::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            PageId::Home => "index.html",
            PageId::Projects => "projects.html",
            PageId::Blog => "blog.html",
            PageId::Contact => "contact.html",
        }
    }

    /// Location path of the page once shown. The home page sits at the
    /// site root, so its path carries no file name.
    pub fn location_path(self) -> &'static str {
        match self {
            PageId::Home => "/",
            PageId::Projects => "/projects.html",
            PageId::Blog => "/blog.html",
            PageId::Contact => "/contact.html",
        }
    }
}

/// One gallery tile. A tile without an image opens the lightbox with its
/// title rendered as text.
pub struct GalleryTile {
    pub title: &'static str,
    pub image: Option<&'static str>,
}

/// One blog entry: the list view shows title + excerpt, the modal shows the
/// full body rendered from markdown.
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body_md: &'static str,
}

/// One project card with an outbound link.
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
}

pub const GALLERY_TILES: &[GalleryTile] = &[
    GalleryTile {
        title: "Sunset over the ghats",
        image: Some("assets/gallery/sunset.png"),
    },
    GalleryTile {
        title: "Monsoon timelapse rig",
        image: Some("assets/gallery/timelapse.png"),
    },
    GalleryTile {
        title: "Sketch: dashboard concept",
        image: None,
    },
    GalleryTile {
        title: "Street market, Jaipur",
        image: Some("assets/gallery/market.png"),
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Shipping a side project in a weekend",
        excerpt: "Scope ruthlessly, pick boring tools, and publish before you polish.",
        body_md: "Scope ruthlessly, pick boring tools, and publish before you polish.\n\n\
The hardest part of a weekend project is not the code, it is saying no. \
I keep a single index card with the three features that must exist by \
Sunday night. Everything else goes on the back of the card, and the back \
of the card is a graveyard.\n\n\
## What survived\n\n\
- A static site generator I already knew\n\
- One data file, checked into the repo\n\
- A deploy script that is just `rsync`\n\n\
The result is not impressive. It is *done*, which beats impressive.",
    },
    BlogPost {
        title: "Notes on teaching myself systems programming",
        excerpt: "Reading other people's code taught me more than any tutorial.",
        body_md: "Reading other people's code taught me more than any tutorial.\n\n\
Tutorials show you the happy path. Production code shows you what happens \
when the happy path meets a decade of users. My routine now is simple: \
pick a small tool I use daily, read its source end to end, and write down \
every decision I would not have made myself.\n\n\
Half of those decisions turn out to be load-bearing.",
    },
    BlogPost {
        title: "Why this site has no build step",
        excerpt: "Plain files age better than toolchains.",
        body_md: "Plain files age better than toolchains.\n\n\
Every build tool I adopted before 2020 is now unmaintained. The HTML I \
wrote in 2015 still renders. That is the whole argument, really.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "raindrop",
        blurb: "A tiny weather station daemon for the Raspberry Pi.",
        url: "https://github.com/gaurav-dev/raindrop",
    },
    Project {
        name: "ledgerline",
        blurb: "Plain-text double-entry bookkeeping with a one-screen TUI.",
        url: "https://github.com/gaurav-dev/ledgerline",
    },
    Project {
        name: "folioview",
        blurb: "This viewer. A portfolio that installs like a tool.",
        url: "https://github.com/gaurav-dev/folioview",
    },
];

/// Hero copy for the home page.
pub const HOME_INTRO_MD: &str = "# Hi, I'm Gaurav\n\n\
I build small, sturdy software: daemons, command-line tools, and the \
occasional desktop app. This viewer collects my projects, photos, and \
notes in one place.\n\n\
Use the navigation above to look around, or flip the theme with the \
toggle in the corner.";
