//! Static page content: profile, navigation, résumé entries and projects.

/// An in-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub label: &'static str,
	pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
	NavItem {
		label: "About",
		href: "#about",
	},
	NavItem {
		label: "Projects",
		href: "#projects",
	},
	NavItem {
		label: "Contact",
		href: "#contact",
	},
];

/// Document metadata for search engines and link previews.
pub struct SiteMeta {
	pub title: &'static str,
	pub description: &'static str,
	pub url: &'static str,
	pub image: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
	title: "Sriram Ravichandran | Full Stack Developer",
	description: "Official portfolio of Sriram Ravichandran. Specialized in React, Node.js, and modern web technologies. View my projects and contact me.",
	url: "https://sriramravichandran.in",
	image: "https://sriramravichandran.in/og-image.png",
};

pub const FIRST_NAME: &str = "SRIRAM";
pub const LAST_NAME: &str = "RAVICHANDRAN";
pub const FULL_NAME: &str = "Sriram Ravichandran";
pub const ROLE: &str = "Full-Stack Developer";
pub const TAGLINE: &str =
	"Building scalable systems, LLM-powered agents, and cloud-native applications with precision and purpose.";
pub const LOCATION: &str = "Chicago, IL";
pub const EMAIL_HREF: &str = "mailto:sriramravichandran02@gmail.com";
pub const RESUME_URL: &str =
	"https://drive.google.com/file/d/183Lp_e2Jk8mGbcJFjZW5YBUiszMMx3XR/view?usp=drive_link";

/// One row of the education or experience timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub date: &'static str,
	pub description: Option<&'static str>,
}

pub const EDUCATION: &[TimelineEntry] = &[
	TimelineEntry {
		title: "M.S. Computer Science",
		subtitle: "Illinois Institute of Technology",
		date: "2024 - 2026",
		description: Some("GPA: 3.44"),
	},
	TimelineEntry {
		title: "B.E. Computer Science",
		subtitle: "Sri Eshwar College of Engineering",
		date: "2019 - 2023",
		description: Some("GPA: 3.66"),
	},
];

pub const EXPERIENCE: &[TimelineEntry] = &[
	TimelineEntry {
		title: "AI Agent Developer Intern",
		subtitle: "NeuralSeek \u{2022} Miami, United States",
		date: "Oct 2025 \u{2013} Nov 2025",
		description: Some(
			"Built a RAG-powered AI agent with automated data lineage to ensure verifiable citations and reduce hallucinations. Improved LLM response quality using prompt engineering and ethical guardrails while meeting security and scalability requirements.",
		),
	},
	TimelineEntry {
		title: "Member Technical Staff",
		subtitle: "Zoho Corporation \u{2022} Chennai, India",
		date: "Jun 2023 \u{2013} Jul 2023",
		description: Some(
			"Resolved high-priority production issues affecting 10,000+ Apple devices and collaborated with frontend teams to ensure seamless REST API integration and troubleshooting.",
		),
	},
	TimelineEntry {
		title: "Project Trainee",
		subtitle: "Zoho Corporation \u{2022} Chennai, India",
		date: "Aug 2022 \u{2013} May 2023",
		description: Some(
			"Identified and fixed security loopholes in the MDM system that enabled policy bypass, reducing violations by 10%. Authored product documentation and gained hands-on experience in debugging and feature-level development.",
		),
	},
	TimelineEntry {
		title: "Summer Intern",
		subtitle: "Zoho Corporation \u{2022} Chennai, India",
		date: "May 2022 \u{2013} Jun 2022",
		description: Some(
			"Developed backend fundamentals through hands-on work with production systems, participating in code reviews and mentorship sessions to improve code quality and engineering best practices.",
		),
	},
];

pub const SKILLS: &[&str] = &[
	"Python",
	"C++",
	"Java",
	"JavaScript",
	"TypeScript",
	"React",
	"Node.js",
	"Jersey",
	"Docker",
	"Kubernetes",
	"Kafka",
	"PostgreSQL",
	"MongoDB",
	"LangGraph",
	"AutoGen",
	"AWS",
	"Git",
	"ElasticSearch",
	"Linux",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
	pub title: &'static str,
	pub detail: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
	Achievement {
		title: "Interizon Hackathon",
		detail: "2021 \u{2022} Winner",
	},
	Achievement {
		title: "Freshathon Expo",
		detail: "2024 \u{2022} Jury Panel",
	},
];

/// Years of industry experience shown by the highlight counter.
pub const YEARS_EXPERIENCE: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub tech: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
	Project {
		title: "SmartHomes",
		description: "A scalable e-commerce platform with intelligent search and AI-powered shopping assistance. Features real-time support via OpenAI, ElasticSearch integration, and containerized deployment.",
		tech: &[
			"React",
			"Servlets",
			"MySQL",
			"MongoDB",
			"ElasticSearch",
			"Docker",
			"OpenAI",
		],
	},
	Project {
		title: "Voice Assistant",
		description: "A Python desktop application that processes natural language commands to execute system operations, fetch real-time web results, and automate routine tasks through voice interaction.",
		tech: &["Python", "NLP", "APIs", "Voice Recognition"],
	},
	Project {
		title: "Connect",
		description: "Full-stack social media application featuring posts, likes, real-time chat, and group functionality. Designed for seamless user interaction with modern web technologies.",
		tech: &["React.js", "Express.js", "MySQL", "WebSockets"],
	},
];

/// A profile link rendered as a round icon button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Social {
	pub label: &'static str,
	pub href: &'static str,
	pub glyph: &'static str,
}

pub const SOCIALS: &[Social] = &[
	Social {
		label: "Email",
		href: EMAIL_HREF,
		glyph: "\u{2709}",
	},
	Social {
		label: "LinkedIn",
		href: "https://linkedin.com/in/sriram-ravichandran",
		glyph: "in",
	},
	Social {
		label: "Github",
		href: "https://www.github.com/sriram-ravichandran",
		glyph: "gh",
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
	pub label: &'static str,
	pub value: &'static str,
	pub glyph: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
	ContactDetail {
		label: LOCATION,
		value: "Open to Relocation",
		glyph: "\u{2316}",
	},
	ContactDetail {
		label: "Phone",
		value: "+1 312 394 9647",
		glyph: "\u{260E}",
	},
];
