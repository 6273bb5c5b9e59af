use std::fmt;

use crate::pipeline::Report;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for merged in &self.users {
            writeln!(f, "{} wrote {} posts", merged.user.username, merged.posts.len())?;
        }

        if self.duplicate_titles.is_empty() {
            writeln!(f, "No repeated titles")?;
        } else {
            writeln!(f, "Repeated titles:")?;
            for title in &self.duplicate_titles {
                writeln!(f, "{title}")?;
            }
        }

        for entry in &self.nearest {
            match &entry.neighbor {
                Some(n) => writeln!(f, "Nearest to {} lives {}, distance: {} m", entry.username, n.username, n.distance_m)?,
                None => writeln!(f, "No other user near {}", entry.username)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pipeline::analyze;
    use crate::types::{Coordinate, Post, PostId, User, UserId};

    #[test]
    fn renders_all_sections() {
        let users = [
            User::new(UserId(1), "Username1", Coordinate::new(0.0, 0.0).unwrap()),
            User::new(UserId(2), "Username2", Coordinate::new(0.0, 1.0).unwrap()),
        ];
        let posts: Vec<Post> = (1..=5).map(|i| Post::new(PostId(i), UserId(1), "same")).collect();

        let text = analyze(&users, &posts).unwrap().to_string();
        assert_eq!(text, "\
Username1 wrote 5 posts
Username2 wrote 0 posts
Repeated titles:
same
Nearest to Username1 lives Username2, distance: 111195 m
Nearest to Username2 lives Username1, distance: 111195 m
");
    }

    #[test]
    fn renders_lonely_user() {
        let users = [User::new(UserId(1), "solo", Coordinate::new(1.0, 1.0).unwrap())];
        let text = analyze(&users, &[]).unwrap().to_string();
        assert_eq!(text, "solo wrote 0 posts\nNo repeated titles\nNo other user near solo\n");
    }
}
