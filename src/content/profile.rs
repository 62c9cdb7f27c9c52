//! Profile panel data — who the portfolio belongs to and where to find them.

/// An outbound link shown under the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Static identity shown in the header, the profile card, and the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Long title under the name in the header.
    pub headline: &'static str,
    /// Short title on the profile card.
    pub title: &'static str,
    pub avatar_url: &'static str,
    /// `user@host` half of the prompt.
    pub prompt_user: &'static str,
    /// Directory and sigil half of the prompt.
    pub prompt_path: &'static str,
    pub links: [SocialLink; 3],
}

pub const PROFILE: Profile = Profile {
    name: "Rahul Kumar",
    headline: "Software Developer | Full Stack Developer",
    title: "Full Stack Developer",
    avatar_url: "https://avatars.githubusercontent.com/u/147478589?v=4",
    prompt_user: "rahul-1901@portfolio",
    prompt_path: ":~$",
    links: [
        SocialLink {
            label: "GitHub",
            url: "https://github.com/rahul-1901",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/rahul-kumar-52898928a",
        },
        SocialLink {
            label: "Instagram",
            url: "https://www.instagram.com/rahulyadav_1916?igsh=M3lieHg3azN0b3Nj",
        },
    ],
};

impl Profile {
    /// Full prompt label, e.g. `rahul-1901@portfolio:~$`.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.prompt_user, self.prompt_path)
    }

    /// Uppercase initials of each word in the name, used as the avatar monogram.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_joins_user_and_path() {
        assert_eq!(PROFILE.prompt(), "rahul-1901@portfolio:~$");
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(PROFILE.initials(), "RK");
        let p = Profile {
            name: "ada  lovelace byron",
            ..PROFILE
        };
        assert_eq!(p.initials(), "ALB");
    }

    #[test]
    fn links_are_absolute() {
        for link in PROFILE.links {
            assert!(link.url.starts_with("https://"), "{}", link.label);
        }
    }
}
