use chrono::NaiveDate;

use super::posts;

pub const WORDS_PER_MINUTE: usize = 200;
pub const EXCERPT_LIMIT: usize = 160;

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub content: &'static str,
}

impl BlogPost {
    pub fn reading_time(&self) -> usize {
        let words = self.content.split_whitespace().count();
        ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1)
    }

    pub fn reading_time_label(&self) -> String {
        format!("{} min read", self.reading_time())
    }

    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }

    /// First paragraph, cut on a word boundary.
    pub fn excerpt(&self) -> String {
        let first = render_blocks(self.content)
            .into_iter()
            .find_map(|b| match b {
                Block::Paragraph(text) => Some(text),
                _ => None,
            })
            .unwrap_or_default();
        truncate_words(&first, EXCERPT_LIMIT)
    }
}

fn truncate_words(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let budget = limit.saturating_sub(1);
    let cut: String = text.chars().take(budget).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c == ',' || c == '.' || c == ' '))
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading(u8, String),
    Paragraph(String),
    List(Vec<String>),
}

/// Markdown subset: `#`..`###` headings, `- ` lists, blank-line paragraphs.
pub fn render_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, list: &mut Vec<String>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(paragraph.join(" ")));
            paragraph.clear();
        }
        if !list.is_empty() {
            blocks.push(Block::List(std::mem::take(list)));
        }
    }

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list);
        } else if let Some((level, text)) = heading(line) {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(Block::Heading(level, text.to_string()));
        } else if let Some(item) = line.strip_prefix("- ") {
            if !paragraph.is_empty() {
                blocks.push(Block::Paragraph(paragraph.join(" ")));
                paragraph.clear();
            }
            list.push(item.trim().to_string());
        } else {
            if !list.is_empty() {
                blocks.push(Block::List(std::mem::take(&mut list)));
            }
            paragraph.push(line);
        }
    }
    flush(&mut blocks, &mut paragraph, &mut list);
    blocks
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    line[hashes..]
        .strip_prefix(' ')
        .map(|text| (hashes as u8, text.trim()))
}

pub trait BlogSource {
    fn posts(&self) -> &[BlogPost];

    fn list_slugs(&self) -> Vec<&'static str> {
        self.posts().iter().map(|p| p.slug).collect()
    }

    fn exists(&self, slug: &str) -> bool {
        self.get_by_slug(slug).is_some()
    }

    fn get_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts().iter().find(|p| p.slug == slug)
    }
}

/// Posts compiled into the bundle, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticBlog {
    posts: Vec<BlogPost>,
}

impl StaticBlog {
    pub fn new(mut posts: Vec<BlogPost>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(a.date));
        Self { posts }
    }
}

impl Default for StaticBlog {
    fn default() -> Self {
        Self::new(posts::all())
    }
}

impl BlogSource for StaticBlog {
    fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &'static str) -> BlogPost {
        BlogPost {
            slug: "test",
            title: "Test",
            author: "Moby Labs",
            date: "2024-03-05",
            content,
        }
    }

    #[test]
    fn bundled_posts_resolve_by_slug() {
        let blog = StaticBlog::default();
        let slugs = blog.list_slugs();
        assert_eq!(slugs.len(), 4);
        for slug in [
            "ship-strikes-preventing-whale-collisions",
            "acoustic-detection-technology-explained",
            "understanding-whale-vocalizations",
            "whale-migration-patterns",
        ] {
            assert!(blog.exists(slug), "missing {}", slug);
        }
        assert!(!blog.exists("does-not-exist"));
        assert!(blog.get_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn posts_are_newest_first() {
        let blog = StaticBlog::default();
        assert!(blog.posts().windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn empty_blog_lists_nothing() {
        let blog = StaticBlog::new(Vec::new());
        assert!(blog.list_slugs().is_empty());
    }

    #[test]
    fn reading_time_rounds_up_with_floor_of_one() {
        assert_eq!(post("just a few words").reading_time(), 1);
        let long: &'static str = Box::leak("word ".repeat(401).into_boxed_str());
        assert_eq!(post(long).reading_time(), 3);
        assert_eq!(post("").reading_time(), 1);
    }

    #[test]
    fn excerpt_is_short_and_marked_when_cut() {
        let short = post("# Title\n\nA short opening.\n\nSecond paragraph.");
        assert_eq!(short.excerpt(), "A short opening.");

        let long = post(
            "Whales communicate across entire ocean basins using low frequency calls that travel \
             for hundreds of kilometres, and the quiet they depend on is disappearing as shipping grows.",
        );
        let excerpt = long.excerpt();
        assert!(excerpt.chars().count() <= EXCERPT_LIMIT);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn bundled_excerpts_fit() {
        for p in StaticBlog::default().posts() {
            assert!(p.excerpt().chars().count() <= EXCERPT_LIMIT);
            assert!(!p.excerpt().is_empty());
        }
    }

    #[test]
    fn blocks_cover_headings_lists_and_paragraphs() {
        let blocks = render_blocks(
            "# Intro\nFirst line\nsame paragraph\n\n## Points\n- one\n- two\nafter list\n\n#### not a heading",
        );
        assert_eq!(
            blocks,
            vec![
                Block::Heading(1, "Intro".into()),
                Block::Paragraph("First line same paragraph".into()),
                Block::Heading(2, "Points".into()),
                Block::List(vec!["one".into(), "two".into()]),
                Block::Paragraph("after list".into()),
                Block::Paragraph("#### not a heading".into()),
            ]
        );
    }

    #[test]
    fn hash_without_space_is_text() {
        assert_eq!(
            render_blocks("#hashtag"),
            vec![Block::Paragraph("#hashtag".into())]
        );
    }

    #[test]
    fn dates_display_long_form() {
        assert_eq!(post("x").display_date(), "March 5, 2024");
    }
}
