//! Static page content.

use galaxia_core::ProjectKind;

/// A titled block of prose.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub title: &'static str,
    pub body: &'static str,
}

/// A titled list of short items.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const ABOUT_PANELS: [Panel; 3] = [
    Panel {
        title: "Who I Am",
        body: "I'm an AI and Data Science learner passionate about exploring new technologies. \
               Curious about how data transforms into intelligent solutions. Always eager to \
               learn, practice, and grow in this exciting field.",
    },
    Panel {
        title: "What I Do",
        body: "I am currently learning the AI and Data Science stack step by step. Studying \
               Python, machine learning, deep learning, and data handling. Building small \
               projects to strengthen my understanding and skills.",
    },
    Panel {
        title: "Where I'm Going",
        body: "I aim to become a full-stack AI & Data Science professional. Excited to work on \
               NLP, computer vision, and generative AI in the future. Focused on growing my \
               knowledge and creating impactful solutions.",
    },
];

/// Title and description of a showcased project.
pub fn project(kind: ProjectKind) -> Panel {
    match kind {
        ProjectKind::Enso => Panel {
            title: "Enso: AI-Powered Chatbot",
            body: "A conversational assistant designed to provide instant and smart replies. \
                   Built using NLP models to understand and respond to user queries. Enhances \
                   user interaction with automated, human-like conversations.",
        },
        ProjectKind::Creative => Panel {
            title: "OpenCV Self-Hiding Tool",
            body: "A computer vision project that hides or masks a person in real time. \
                   Utilizes OpenCV for image detection and object manipulation. Showcases \
                   practical use of AI in privacy and security applications.",
        },
        ProjectKind::BoostUp => Panel {
            title: "BoostUp: AI-Powered Resume Scanner",
            body: "An intelligent tool that analyzes resumes and highlights key strengths. Uses \
                   NLP and machine learning to match resumes with job requirements. Helps users \
                   optimize their profiles for better hiring opportunities.",
        },
    }
}

/// Short label shown on a project column before it is hovered.
pub fn project_label(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Enso => "ENSO",
        ProjectKind::Creative => "SELF-HIDE",
        ProjectKind::BoostUp => "BOOSTUP",
    }
}

pub const SKILLS_TITLE: &str = "Education and Skills";
pub const SKILLS_HEADLINE: &str = "I am curious to learn new things";
pub const SKILLS_SUBLINE: &str = "Always exploring and growing";

pub const SKILLS_PARAGRAPHS: [&str; 2] = [
    "As an aspiring AI and Data Science professional, I'm dedicated to mastering the \
     fundamentals of machine learning and data analysis. My journey focuses on building \
     practical skills through hands-on projects and continuous learning.",
    "From Python programming to deep learning frameworks, I'm exploring every aspect of this \
     fascinating field. Each project teaches me something new, and I'm excited to apply these \
     skills to solve real-world problems with intelligent solutions.",
];

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Learning",
        items: &["Python Programming", "Machine Learning", "Data Analysis", "Deep Learning"],
    },
    SkillGroup {
        title: "Tools",
        items: &["Pandas & NumPy", "Scikit-learn", "TensorFlow", "Jupyter Notebooks"],
    },
    SkillGroup {
        title: "Goals",
        items: &["NLP Projects", "Computer Vision", "Generative AI", "Real-world Solutions"],
    },
];

pub const CONTACT_BLURB: &str = "I'm always excited to discuss AI projects, data science \
     opportunities, or collaborate on innovative solutions that make a difference.";
