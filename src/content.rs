//! Static copy for the landing narrative and the content pages.

/// One home page section of the climb.
pub struct Section {
    pub eyebrow: Option<&'static str>,
    pub lead: Option<&'static str>,
    pub headline: &'static str,
    pub accent: Option<&'static str>,
    pub body: &'static [&'static str],
    pub cards: &'static [Card],
    pub stats: &'static [Stat],
    pub kind: SectionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hook,
    OldMap,
    Reframe,
    Collective,
    TheMath,
    Pillars,
    Invitation,
}

pub struct Card {
    pub title: &'static str,
    pub headline: Option<&'static str>,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const EXPLORER_COUNT: u32 = 847;
pub const EXPLORERS_THIS_WEEK: u32 = 12;

pub static SECTIONS: [Section; 7] = [
    Section {
        eyebrow: None,
        lead: None,
        headline: "We're mapping a new healthcare system.",
        accent: Some("But we need healthcare workers to help draw the trails."),
        body: &[
            "Meroka is building a collective of independent physicians redrawing how healthcare works.",
            "Begin the climb",
        ],
        cards: &[],
        stats: &[],
        kind: SectionKind::Hook,
    },
    Section {
        eyebrow: Some("The Old Map"),
        lead: None,
        headline: "The old map has one trail.",
        accent: Some("Consolidate. Fall in line. Let PE lead the way."),
        body: &[
            "Insurance gatekeeping. PE rollups. Burnout dressed up as \"efficiency.\"",
            "That's the path they drew for you.",
        ],
        cards: &[],
        stats: &[
            Stat {
                value: "78%",
                label: "of physicians now employed by hospitals or corporate entities",
            },
            Stat {
                value: "1 in 4",
                label: "physician practices owned by private equity",
            },
            Stat {
                value: "7 yrs",
                label: "average lifespan of an independent practice before selling",
            },
            Stat {
                value: "340%",
                label: "increase in administrative burden since 2000",
            },
        ],
        kind: SectionKind::OldMap,
    },
    Section {
        eyebrow: None,
        lead: Some("But that's just one path."),
        headline: "At Meroka, we see a mountain full of trails",
        accent: Some("nobody bothered to map."),
        body: &["\"Who said getting to the summit couldn't be the adventure?\""],
        cards: &[],
        stats: &[],
        kind: SectionKind::Reframe,
    },
    Section {
        eyebrow: None,
        lead: Some("The old map was drawn by a few people who never climbed it."),
        headline: "This one gets drawn by everyone on the trail.",
        accent: None,
        body: &[],
        cards: &[
            Card {
                title: "Trails you didn't notice",
                headline: None,
                description: "Paths to practicing on your own terms, however that looks for you.",
            },
            Card {
                title: "Gear you couldn't carry alone",
                headline: None,
                description: "Tools and tech that used to require a whole system behind you. Now shared across the crew.",
            },
            Card {
                title: "Crew that has your back",
                headline: None,
                description: "Fellow explorers who've been where you're headed. Advice, support, and a seat by the fire.",
            },
        ],
        stats: &[],
        kind: SectionKind::Collective,
    },
    Section {
        eyebrow: None,
        lead: None,
        headline: "The math of the mountain",
        accent: None,
        body: &[],
        cards: &[
            Card {
                title: "One physician on the mountain?",
                headline: None,
                description: "You'll walk the same trails everyone else did.",
            },
            Card {
                title: "Ten?",
                headline: None,
                description: "Now you're finding shortcuts.",
            },
            Card {
                title: "A hundred?",
                headline: None,
                description: "You're drawing new ones.",
            },
            Card {
                title: "A thousand?",
                headline: None,
                description: "That's when Congress starts taking our calls.",
            },
        ],
        stats: &[],
        kind: SectionKind::TheMath,
    },
    Section {
        eyebrow: None,
        lead: Some("We're gathering a crew to draw the new paths together."),
        headline: "Here's what the expedition can eventually unlock",
        accent: None,
        body: &[],
        cards: &[
            Card {
                title: "Rope Teams",
                headline: Some("Collective leverage that actually works."),
                description: "Vendor deals, group purchasing, shared bargaining power. When you're tied together, no one negotiates alone.",
            },
            Card {
                title: "Gear Cache",
                headline: Some("Technology unlocked."),
                description: "AI tools, billing automation, practice analytics. Gear that used to be locked behind hospital walls, now standard issue.",
            },
            Card {
                title: "Exit Routes",
                headline: Some("Your mountain, your timeline."),
                description: "Paths to ownership, liquidity, and succession the old map never showed. Exit on your terms, not theirs.",
            },
        ],
        stats: &[],
        kind: SectionKind::Pillars,
    },
    Section {
        eyebrow: None,
        lead: None,
        headline: "The map isn't finished.",
        accent: Some("We're looking for healthcare workers to help draw what's next."),
        body: &["The best paths haven't been drawn yet."],
        cards: &[],
        stats: &[],
        kind: SectionKind::Invitation,
    },
];

pub struct CrewMember {
    pub name: &'static str,
    pub role: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CREW: [CrewMember; 6] = [
    CrewMember {
        name: "Dr. Sarah Chen",
        role: "The Cartographer",
        title: "CEO & Co-founder",
        description: "Draws the map everyone else follows",
    },
    CrewMember {
        name: "Marcus Williams",
        role: "The Trailblazer",
        title: "CTO",
        description: "Builds paths through impossible terrain",
    },
    CrewMember {
        name: "Dr. Emily Rodriguez",
        role: "The Basecamp Builder",
        title: "COO",
        description: "If it stands, it's because of them",
    },
    CrewMember {
        name: "James Park",
        role: "The Fire Keeper",
        title: "Head of Community",
        description: "Where the crew comes to rest and regroup",
    },
    CrewMember {
        name: "Lisa Thompson",
        role: "The Scout",
        title: "Head of Product",
        description: "Finds the pain points before they find us",
    },
    CrewMember {
        name: "Tom Morrison",
        role: "The Signal Sender",
        title: "Head of Marketing",
        description: "Makes sure no one climbs alone",
    },
];

pub struct Sherpa {
    pub name: &'static str,
    pub specialty: &'static str,
    pub years: u32,
    pub badge: &'static str,
    pub known_for: &'static str,
}

pub static SHERPAS: [Sherpa; 5] = [
    Sherpa {
        name: "Dr. Rachel Kim",
        specialty: "Family Medicine",
        years: 18,
        badge: "Summit Guide",
        known_for: "First to test the group purchasing trail",
    },
    Sherpa {
        name: "Dr. Marcus Johnson",
        specialty: "Internal Medicine",
        years: 12,
        badge: "Pathfinder",
        known_for: "Mapped the EHR escape route",
    },
    Sherpa {
        name: "Dr. Priya Patel",
        specialty: "Pediatrics",
        years: 15,
        badge: "Fire Starter",
        known_for: "Lit the first campfire in the Midwest region",
    },
    Sherpa {
        name: "Dr. David Chen",
        specialty: "Orthopedics",
        years: 20,
        badge: "Rope Team Captain",
        known_for: "Survived two PE buyout attempts, still independent",
    },
    Sherpa {
        name: "Dr. Angela Torres",
        specialty: "OB-GYN",
        years: 10,
        badge: "Summit Guide",
        known_for: "Runs the most active thread in the forums",
    },
];

pub struct PressItem {
    pub date: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

pub static SIGNAL_FLARES: [PressItem; 3] = [
    PressItem {
        date: "Jan 2025",
        title: "Meroka Raises $12M to Build Healthcare's New Map",
        source: "TechCrunch",
    },
    PressItem {
        date: "Dec 2024",
        title: "500 Independent Physicians Join the Collective",
        source: "Healthcare Dive",
    },
    PressItem {
        date: "Nov 2024",
        title: "Why This Startup Thinks Healthcare Needs Explorers, Not Conquerors",
        source: "Forbes",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Complete,
    Current,
    Upcoming,
}

pub struct Milestone {
    pub status: MilestoneStatus,
    pub quarter: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub static TRAIL_MAP: [Milestone; 5] = [
    Milestone {
        status: MilestoneStatus::Complete,
        quarter: "Q3 2024",
        title: "Trail Markers",
        description: "Core platform launch",
        items: &["Member portal", "Community forums", "Resource library"],
    },
    Milestone {
        status: MilestoneStatus::Complete,
        quarter: "Q4 2024",
        title: "First Campfire",
        description: "Collective leverage tools",
        items: &["Group purchasing", "Shared negotiations", "Vendor partnerships"],
    },
    Milestone {
        status: MilestoneStatus::Current,
        quarter: "Q1 2025",
        title: "Hidden Paths",
        description: "Technology sharing",
        items: &["EHR integrations", "Billing automation", "AI assistants"],
    },
    Milestone {
        status: MilestoneStatus::Upcoming,
        quarter: "Q2 2025",
        title: "Summit Routes",
        description: "Financial instruments",
        items: &["Liquidity options", "Succession planning", "Investment access"],
    },
    Milestone {
        status: MilestoneStatus::Upcoming,
        quarter: "Q3 2025",
        title: "New Territories",
        description: "Expansion & advocacy",
        items: &["Policy initiatives", "Regional chapters", "Training programs"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Live,
    Beta,
    ComingSoon,
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ToolStatus::Live => "Live",
            ToolStatus::Beta => "Beta",
            ToolStatus::ComingSoon => "Coming Soon",
        };
        write!(f, "{}", label)
    }
}

pub struct Tool {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ToolStatus,
}

pub static GEAR: [Tool; 6] = [
    Tool {
        title: "Member Portal",
        description: "Your expedition headquarters",
        status: ToolStatus::Live,
    },
    Tool {
        title: "Resource Library",
        description: "200+ guides and templates",
        status: ToolStatus::Live,
    },
    Tool {
        title: "Group Purchasing",
        description: "15-40% savings on supplies",
        status: ToolStatus::Live,
    },
    Tool {
        title: "Community Forums",
        description: "Connect with fellow explorers",
        status: ToolStatus::Live,
    },
    Tool {
        title: "Practice Analytics",
        description: "Benchmark your performance",
        status: ToolStatus::Beta,
    },
    Tool {
        title: "AI Documentation",
        description: "Cut admin time in half",
        status: ToolStatus::ComingSoon,
    },
];

pub struct Confessional {
    pub text: &'static str,
    pub time: &'static str,
    pub reactions: u32,
}

pub static CONFESSIONALS: [Confessional; 3] = [
    Confessional {
        text: "I spent 3 hours on prior auths yesterday. Three hours I could've spent with patients. The old map says this is normal.",
        time: "2 hours ago",
        reactions: 47,
    },
    Confessional {
        text: "Got offered 2x my salary to sell to a PE firm. Turned it down. Some trails aren't worth taking.",
        time: "5 hours ago",
        reactions: 128,
    },
    Confessional {
        text: "My EMR crashed mid-appointment. Again. Hospital IT says it's 'within acceptable parameters.' Acceptable to whom?",
        time: "1 day ago",
        reactions: 89,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinKind {
    Member,
    Milestone,
    Savings,
    Trail,
}

pub struct Win {
    pub kind: WinKind,
    pub text: &'static str,
    pub time: &'static str,
}

pub static WINS: [Win; 5] = [
    Win {
        kind: WinKind::Member,
        text: "Dr. Patricia Nguyen joined the expedition",
        time: "1 hour ago",
    },
    Win {
        kind: WinKind::Milestone,
        text: "850 explorers on the mountain",
        time: "3 hours ago",
    },
    Win {
        kind: WinKind::Savings,
        text: "Collective saved $2.3M on supplies this month",
        time: "1 day ago",
    },
    Win {
        kind: WinKind::Member,
        text: "Riverside Family Practice (4 physicians) joined",
        time: "2 days ago",
    },
    Win {
        kind: WinKind::Trail,
        text: "New trail mapped: Pediatrics group purchasing",
        time: "3 days ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentStatus {
    Active,
    Testing,
}

pub struct Experiment {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ExperimentStatus,
    pub engagement: &'static str,
}

impl Experiment {
    /// Fill fraction of the engagement bar.
    pub fn momentum(&self) -> f32 {
        match self.status {
            ExperimentStatus::Active => 0.8,
            ExperimentStatus::Testing => 0.4,
        }
    }
}

pub static SCOUTING_MISSIONS: [Experiment; 4] = [
    Experiment {
        title: "Doc's Weekly Rant",
        description: "Anonymous physician dispatches",
        status: ExperimentStatus::Active,
        engagement: "12K reached",
    },
    Experiment {
        title: "IP Spotlight Series",
        description: "Independents thriving their way",
        status: ExperimentStatus::Active,
        engagement: "8 episodes",
    },
    Experiment {
        title: "The Confession Box",
        description: "Anonymous healthcare worker stories",
        status: ExperimentStatus::Testing,
        engagement: "200+ stories",
    },
    Experiment {
        title: "Burnout Calculator",
        description: "What the old map is costing you",
        status: ExperimentStatus::Testing,
        engagement: "1.2K uses",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Saved $47K in my first year through group purchasing. That's a new hire I didn't think I could afford.",
        attribution: "Family Medicine, 12 years independent",
    },
    Testimonial {
        quote: "I was three months from selling. Then I found 200 people who'd figured out how not to.",
        attribution: "Family Medicine, 11 years independent",
    },
    Testimonial {
        quote: "Asked a question at 10pm. Had three answers by morning. From people who'd been there.",
        attribution: "Dermatology, 6 years independent",
    },
];

/// `(value, label)` pairs for the Join form pick lists.
pub static SPECIALTIES: [(&str, &str); 8] = [
    ("family", "Family Medicine"),
    ("internal", "Internal Medicine"),
    ("pediatrics", "Pediatrics"),
    ("obgyn", "OB-GYN"),
    ("cardiology", "Cardiology"),
    ("orthopedics", "Orthopedics"),
    ("dermatology", "Dermatology"),
    ("other", "Other"),
];

pub static STATES: [(&str, &str); 5] = [
    ("CA", "California"),
    ("TX", "Texas"),
    ("FL", "Florida"),
    ("NY", "New York"),
    ("other", "Other"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::SectionLayout;

    #[test]
    fn one_narrative_block_per_section() {
        assert_eq!(SECTIONS.len(), SectionLayout::default().section_count());
        assert_eq!(SECTIONS[0].kind, SectionKind::Hook);
        assert_eq!(SECTIONS[6].kind, SectionKind::Invitation);
    }

    #[test]
    fn exactly_one_milestone_is_in_progress() {
        let current = TRAIL_MAP
            .iter()
            .filter(|m| m.status == MilestoneStatus::Current)
            .count();
        assert_eq!(current, 1);
    }
}
