//! Seed content inserted when a bulk insert arrives without a body.

use super::post::BlogPost;

/// `(id, title, author, content, publication_date)`
type SampleRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// The fixed sample set. Immutable; callers get fresh copies via [`sample_posts`].
const SAMPLE_POSTS: [SampleRow; 5] = [
    (
        "the-art-of-programming",
        "The Art of Programming",
        "John Doe",
        "Programming is both an art and a science. In this blog post, we explore the creative aspects of coding and how it intersects with technology.",
        "2023-09-16",
    ),
    (
        "getting-started-with-python",
        "Getting Started with Python",
        "Jane Smith",
        "Python is a versatile and beginner-friendly programming language. In this tutorial, we'll cover the basics of Python programming.",
        "2023-09-15",
    ),
    (
        "the-future-of-artificial-intelligence",
        "The Future of Artificial Intelligence",
        "David Johnson",
        "Artificial Intelligence is changing the world. In this blog post, we discuss the current state of AI and what the future holds.",
        "2023-09-14",
    ),
    (
        "web-development-trends-in-2023",
        "Web Development Trends in 2023",
        "Sarah Brown",
        "Web development is evolving rapidly. Find out what trends are shaping the web development landscape in 2023.",
        "2023-09-13",
    ),
    (
        "exporing-the-cosmos",
        "Exploring the Cosmos",
        "Michael Anderson",
        "Astronomy has always fascinated humanity. Join us on a journey through the cosmos as we explore the wonders of space.",
        "2023-09-12",
    ),
];

/// Owned copies of [`SAMPLE_POSTS`].
pub fn sample_posts() -> Vec<BlogPost> {
    SAMPLE_POSTS
        .iter()
        .map(|&(id, title, author, content, date)| {
            BlogPost::new(id, title, author, content, date)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_distinct() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 5);
        for (i, a) in posts.iter().enumerate() {
            assert!(posts[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert_eq!(posts[0].author, "John Doe");
    }
}
