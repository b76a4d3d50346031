//! The compiled-in portfolio content.

use super::{
    About, Certification, ContactInfo, Education, Experience, Link, Portfolio, Profile, Project,
    Skill, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Build the default portfolio.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Sivananthini Ravichandran".to_string(),
            tagline: "Hello, I'm".to_string(),
            roles: strings(&[
                "Software Enthusiast",
                "IT Lecturer",
                "Software Developer",
                "Web Developer",
                "Software Engineer",
                "IT Coordinator",
            ]),
            links: vec![
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/sivananthini-ravichandran-4229742a2/"
                        .to_string(),
                },
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Sivananthini164/".to_string(),
                },
            ],
        },
        about: About {
            summary: "As a dedicated ICT student with a strong passion for MERN stack \
                      development, I bring solid technical expertise in building dynamic, \
                      user-friendly, and scalable full-stack web applications using MongoDB, \
                      Express.js, React, and Node.js. I am committed to delivering \
                      high-quality performance, clean architecture, and seamless \
                      functionality across the entire stack."
                .to_string(),
            education: vec![
                Education {
                    school: "CP/N/Cambridge National College".to_string(),
                    lines: strings(&["Result: A B C", "District Rank: 4", "Island Rank: 123"]),
                },
                Education {
                    school: "University of Sri Jayewardenepura".to_string(),
                    lines: strings(&["BICT. Specl in Software Technology", "CGPA: 3.58"]),
                },
            ],
        },
        skills: Skills {
            technical: vec![
                Skill {
                    name: "HTML5".to_string(),
                    percent: 95,
                },
                Skill {
                    name: "CSS3".to_string(),
                    percent: 95,
                },
                Skill {
                    name: "ReactJS".to_string(),
                    percent: 85,
                },
                Skill {
                    name: "NodeJS".to_string(),
                    percent: 85,
                },
                Skill {
                    name: "JavaScript".to_string(),
                    percent: 85,
                },
                Skill {
                    name: "SQL".to_string(),
                    percent: 95,
                },
                Skill {
                    name: "Java".to_string(),
                    percent: 75,
                },
                Skill {
                    name: "C".to_string(),
                    percent: 85,
                },
                Skill {
                    name: "C#".to_string(),
                    percent: 95,
                },
                Skill {
                    name: "Python".to_string(),
                    percent: 75,
                },
                Skill {
                    name: "Wordpress".to_string(),
                    percent: 75,
                },
            ],
            soft: strings(&[
                "Adaptability",
                "Time Management",
                "Motivation",
                "Decision Making",
                "Positivity",
                "Leadership",
                "Critical Thinking",
                "Negotiation",
                "Team Work",
                "Creativity",
                "Problem-Solving",
                "Communication",
                "Attention to Detail",
                "Collaboration",
                "Conflict Resolution",
                "Multitasking",
                "Work Ethic",
                "Emotional Intelligence",
                "Responsibility",
                "Self-Learning",
            ]),
            tools: strings(&[
                "Visual Studio Code",
                "SSMS",
                "CodeBlocks",
                "Inteliji",
                "Jira",
                "PowerBI",
                "GitHub",
                "Visual Studio",
                "Jupyter",
                "Figma",
                "AndroidStudio",
                "PostMan",
                "MongoDB",
                "Canva",
                "Adobe Photoshop",
            ]),
        },
        certifications: vec![
            Certification {
                name: "Introduction to Backend Development".to_string(),
                issuer: "Coursera".to_string(),
                date: "Dec 2024".to_string(),
            },
            Certification {
                name: "Data Analytics 30 Days Master Class".to_string(),
                issuer: "NoviTech R&D Pvt Ltd".to_string(),
                date: "Jul 2024".to_string(),
            },
            Certification {
                name: "Java Programming".to_string(),
                issuer: "Great Learning Academy".to_string(),
                date: "Jun 2024".to_string(),
            },
            Certification {
                name: "Internet of Things 30 Days Master Class".to_string(),
                issuer: "NoviTech R&D Pvt Ltd".to_string(),
                date: "Feb 2024".to_string(),
            },
        ],
        experience: vec![
            Experience {
                role: "IT Lecturer".to_string(),
                company: "IVTC Campus".to_string(),
                period: "Apr 2025 - Present".to_string(),
                description: "Serving as a part-time lecturer, delivering semester subjects \
                              for the BIT degree program, BSc in Artificial Intelligence, \
                              BSc in Cyber Security, such as Web Design and Software \
                              Development, Programming Languages, etc."
                    .to_string(),
            },
            Experience {
                role: "Academic Coordinator, Web Developer & Lecturer".to_string(),
                company: "TT Metro Campus".to_string(),
                period: "May 2025 - Nov 2025".to_string(),
                description: "I oversee the smooth functioning of academic operations while \
                              delivering quality lectures in the field of Information \
                              Technology."
                    .to_string(),
            },
            Experience {
                role: "Software Engineer Intern".to_string(),
                company: "Gamage Recruiters Pvt Ltd".to_string(),
                period: "Apr 2025 - Oct 2025".to_string(),
                description: "Developed responsive websites, optimized performance, and \
                              delivered full-stack MERN applications for global clients."
                    .to_string(),
            },
            Experience {
                role: "District Coordinator".to_string(),
                company: "T-Field Youth Development Centre".to_string(),
                period: "2017 - Present".to_string(),
                description: "Helping upcountry students to overcome their challenges."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                title: "Veritas LMS - Learning Management System".to_string(),
                description: "E-learning and management platform".to_string(),
                github:
                    "https://github.com/Prathviharan/Veritas-Campus-Learning-Management-System"
                        .to_string(),
                demo: Some("https://veritas-campus-lms-ywm1.vercel.app/".to_string()),
            },
            Project {
                title: "AllFresh - Laundry Services Website".to_string(),
                description: "A comprehensive laundry service management platform".to_string(),
                github: "https://github.com/Sivananthini164/Laundry".to_string(),
                demo: Some("https://laundry-pearl.vercel.app/".to_string()),
            },
            Project {
                title: "DonateFood - Food Wasting Management".to_string(),
                description: "Platform to reduce food waste through donations".to_string(),
                github: "https://github.com/Sivananthini164/DonateFood".to_string(),
                demo: Some("https://sivananthini164.github.io/DonateFood/".to_string()),
            },
            Project {
                title: "CreateCV - Building CV/Resume".to_string(),
                description: "Interactive CV/resume builder application".to_string(),
                github: "https://github.com/Sivananthini164/CreateCV".to_string(),
                demo: Some("https://sivananthini164.github.io/CreateCV/".to_string()),
            },
            Project {
                title: "Reserve Master - Lecture Hall & Lab Management System".to_string(),
                description: "System for managing educational facility reservations".to_string(),
                github: "https://github.com/Sivananthini164/Reserve_Master".to_string(),
                demo: Some("https://sivananthini164.github.io/Reserve_Master/".to_string()),
            },
            Project {
                title: "Automated Open & Closed Door using Arduino".to_string(),
                description: "IoT-based automated door control system".to_string(),
                github: "https://github.com/Sivananthini164/Automated_Door".to_string(),
                demo: None,
            },
            Project {
                title: "An Interactive Dictionary Application".to_string(),
                description: "Feature-rich dictionary with interactive elements".to_string(),
                github: "https://github.com/Sivananthini164/Dictionary".to_string(),
                demo: Some("https://sivananthini164.github.io/Dictionary/".to_string()),
            },
            Project {
                title: "A Cocktail Application".to_string(),
                description: "Cocktail recipe and discovery platform".to_string(),
                github: "https://github.com/Sivananthini164/Cocktail-App".to_string(),
                demo: Some("https://sivananthini164.github.io/Cocktail-App/".to_string()),
            },
            Project {
                title: "User-Experienced Snake Game".to_string(),
                description: "Modern take on the classic snake game".to_string(),
                github: "https://github.com/Sivananthini164/snake-Game".to_string(),
                demo: Some("https://sivananthini164.github.io/snake-Game/".to_string()),
            },
            Project {
                title: "Virtual Piano Keyboard".to_string(),
                description: "Interactive virtual piano for web".to_string(),
                github: "https://github.com/Sivananthini164/Piano_keyboard".to_string(),
                demo: Some("https://sivananthini164.github.io/Piano_keyboard/".to_string()),
            },
        ],
        contact: vec![
            ContactInfo {
                label: "Email".to_string(),
                value: "sivananthini611@gmail.com".to_string(),
                link: "mailto:sivananthini611@gmail.com".to_string(),
            },
            ContactInfo {
                label: "LinkedIn".to_string(),
                value: "LinkedIn Profile".to_string(),
                link: "https://www.linkedin.com/in/sivananthini-ravichandran-4229742a2/"
                    .to_string(),
            },
            ContactInfo {
                label: "Phone".to_string(),
                value: "+94 77 203 2122".to_string(),
                link: "tel:+94772032122".to_string(),
            },
        ],
    }
}
