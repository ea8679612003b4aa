#![forbid(unsafe_code)]

//! Static résumé content for the non-catalogue sections.

/// Symbolic icon; the renderer picks a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    User,
    Code,
    Zap,
    GraduationCap,
    Briefcase,
    FolderKanban,
    Coffee,
    Puzzle,
    Guitar,
    BookOpen,
    Cat,
    Dumbbell,
    Bike,
    Gauge,
    Heart,
    Download,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    /// Shown in the hero banner.
    pub headline: &'static str,
    /// Shown under the name in the sidebar.
    pub role: &'static str,
    pub cv_path: &'static str,
    pub portrait: &'static str,
}

pub const IDENTITY: Identity = Identity {
    name: "Rasmus Hogslätt",
    headline: "Software Developer",
    role: "Software developer",
    cv_path: "/reports/CV.pdf",
    portrait: "/me.jpg",
};

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub icon: Icon,
}

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Hi there! I'm a software developer in Sweden. My favorite programming language is Rust, \
     but I am also familiar with languages like C++, Java, Python, etc.",
    "I am curious about new technologies, so when given the time, I often tend to dabble with \
     things. This has led me to build drones, RC-cars and becoming a Rust evangelist.",
];

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Software developer",
        icon: Icon::User,
    },
    Highlight {
        label: "Rust",
        icon: Icon::Code,
    },
    Highlight {
        label: "Safe & Performant code",
        icon: Icon::Zap,
    },
];

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub year: u16,
    pub summary: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Master's Degree in Technology of Media",
    school: "Linköping University",
    year: 2024,
    summary: "Specialized in computer graphics and AI. Thesis: \"Mixed reality for control and \
              visualization of imminent path of vehicles\"",
};

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub logo: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 5] = [
    Experience {
        title: "Rust Backend Developer",
        company: "ThirdAct",
        logo: "/images/logos/thirdact.png",
        period: "2024 November - Present",
        description: "Developed backend code in Rust to speed up interactions with Azure Cosmos \
                      databases. This involved handling large amounts of data interfacing with \
                      various APIs. I also created a library for handling scheduling and \
                      availability for stores etc..",
        skills: &["Rust", "Azure", "Javascript", "APIs", "Git"],
    },
    Experience {
        title: "Software Engineer",
        company: "Saab",
        logo: "/images/logos/saab.png",
        period: "2024 June - 2024 November",
        description: "Maintained and developed software used in some of Saab's underwater products.",
        skills: &["Git", "Linux", "Ada", "Pascal", "CI/CD"],
    },
    Experience {
        title: "Research Assistant Developer",
        company: "Linköping University",
        logo: "/images/logos/liu.png",
        period: "2022 - 2023",
        description: "Worked through summer and part time during coming semesters on the open \
                      source project Inviwo. It is an open source scientific visualization \
                      software developed mainly in C++ and OpenGL.",
        skills: &["C++", "Python", "OpenGL", "3D-Rendering"],
    },
    Experience {
        title: "Software developer & Electronics Assembly",
        company: "Easy Laser",
        logo: "/images/logos/easylaser.jpeg",
        period: "2018 - 2022",
        description: "Worked full time before university, assembling laser based measuring \
                      devices. Here I saw how all steps of the supply chain worked, given that \
                      everything was done in house. Throughout studies, I worked part time \
                      during summer as software developer.",
        skills: &["C#", "Python", "Electronics", "Soldering"],
    },
    Experience {
        title: "Math Assistant Teacher",
        company: "Linköping University",
        logo: "/images/logos/liu.png",
        period: "2020 - 2021",
        description: "I assisted in teaching fundamental math, and single- and multivariable \
                      calculus for first year university students. This entailed having my own \
                      classes where I held presentations and students were able to ask me \
                      questions. I also assisted in coding courses, such as object oriented \
                      programming and immersive visualization.",
        skills: &["Math", "Teaching"],
    },
];

// ---------------------------------------------------------------------------
// Hobbies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hobby {
    pub name: &'static str,
    pub icon: Icon,
}

pub const HOBBIES_INTRO: &str = "Things easily tend to catch my interest, so I often find myself \
                                 exploring different hobbies and technologies. Some that I enjoy are";

pub const HOBBIES: [Hobby; 10] = [
    Hobby {
        name: "solving Rubik's cubes",
        icon: Icon::Puzzle,
    },
    Hobby {
        name: "playing the Guitar",
        icon: Icon::Guitar,
    },
    Hobby {
        name: "reading books",
        icon: Icon::BookOpen,
    },
    Hobby {
        name: "reading Donald Duck comics",
        icon: Icon::Coffee,
    },
    Hobby {
        name: "spending time with my cat",
        icon: Icon::Cat,
    },
    Hobby {
        name: "going to the gym",
        icon: Icon::Dumbbell,
    },
    Hobby {
        name: "bicycling",
        icon: Icon::Bike,
    },
    Hobby {
        name: "running",
        icon: Icon::Gauge,
    },
    Hobby {
        name: "coding personal projects",
        icon: Icon::Code,
    },
    Hobby {
        name: "spending time with family",
        icon: Icon::Heart,
    },
];

/// Join items as prose: `a, b, c and d.`
///
/// A single item gets only the full stop; no items give an empty string.
pub fn hobby_sentence<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let items: Vec<&str> = items.into_iter().collect();
    let Some((last, rest)) = items.split_last() else {
        return String::new();
    };
    let mut out = String::new();
    for (i, item) in rest.iter().enumerate() {
        out.push_str(item);
        out.push_str(if i + 1 == rest.len() { " and " } else { ", " });
    }
    out.push_str(last);
    out.push('.');
    out
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink {
        label: "GitHub",
        url: "https://github.com/RasmusHogslatt",
    },
    FooterLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/rasmushogslatt/",
    },
    FooterLink {
        label: "Email",
        url: "mailto:r.hogslatt@gmail.com",
    },
];
