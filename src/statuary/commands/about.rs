use crate::commands::{CmdResult, Page};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub headline: &'static str,
    pub intro: &'static str,
    pub story: Vec<&'static str>,
    pub stats: Vec<Stat>,
    pub values: Vec<Value>,
    pub team: Vec<TeamMember>,
}

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_page(Page::About(page())))
}

fn page() -> AboutPage {
    AboutPage {
        headline: "Bringing Timeless Art to Your World",
        intro: "For over a decade, StatueArt has been the premier destination for sculpture \
                enthusiasts, collectors, and art lovers seeking exceptional pieces that inspire \
                and endure.",
        story: vec![
            "Founded in 2014 by art historian Dr. Elena Vasquez and sculptor Marcus Chen, \
             StatueArt began as a small gallery in Florence, Italy. Our passion for sculptural \
             art and commitment to supporting artists led us to create a platform where \
             exceptional sculptures could find their way to appreciative collectors worldwide.",
            "Today, we work with over 150 artists from 30 countries, offering everything from \
             classical reproductions to cutting-edge contemporary pieces. Our team of art experts \
             carefully curates each collection, ensuring that every sculpture meets our standards \
             for artistic merit, craftsmanship, and authenticity.",
            "We believe that great art should be accessible, which is why we offer pieces at \
             various price points and provide detailed information about each artist and their \
             techniques. Our mission is to connect people with art that moves them and enriches \
             their lives.",
        ],
        stats: vec![
            Stat {
                label: "Sculptures Available",
                value: "2,500+",
            },
            Stat {
                label: "Artists Featured",
                value: "150+",
            },
            Stat {
                label: "Countries Shipped",
                value: "45+",
            },
            Stat {
                label: "Happy Customers",
                value: "10,000+",
            },
        ],
        values: vec![
            Value {
                title: "Artistic Excellence",
                description: "We curate only the finest sculptures from master artisans and \
                              emerging talents worldwide.",
            },
            Value {
                title: "Quality Assurance",
                description: "Every piece undergoes rigorous quality checks to ensure it meets \
                              our exacting standards.",
            },
            Value {
                title: "Cultural Heritage",
                description: "We preserve and celebrate the rich tradition of sculptural art \
                              across cultures and eras.",
            },
            Value {
                title: "Customer Care",
                description: "Our dedicated team provides personalized service to help you find \
                              the perfect piece.",
            },
        ],
        team: vec![
            TeamMember {
                name: "Dr. Elena Vasquez",
                role: "Co-Founder & Art Director",
                bio: "Art historian with 20+ years experience in Renaissance and Classical sculpture.",
            },
            TeamMember {
                name: "Marcus Chen",
                role: "Co-Founder & Master Sculptor",
                bio: "Award-winning sculptor specializing in contemporary interpretations of \
                      classical forms.",
            },
            TeamMember {
                name: "Sarah Williams",
                role: "Curator & Artist Relations",
                bio: "Connects with artists worldwide to bring diverse sculptural voices to our \
                      platform.",
            },
        ],
    }
}
