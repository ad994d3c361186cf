//! Built-in sample listings and the single-select option lists shown beside them.

use crate::models::{Job, JobType, Recruiter};

/// Sentinel selector value meaning "no constraint on this dimension".
pub const ALL: &str = "All";

pub const JOB_TYPE_OPTIONS: &[&str] = &[ALL, "Full-time", "Part-time", "Contract", "Remote"];

pub const JOB_LOCATION_OPTIONS: &[&str] = &[
    ALL,
    "San Francisco, CA",
    "New York, NY",
    "Remote",
    "Austin, TX",
    "Seattle, WA",
    "Los Angeles, CA",
    "Boston, MA",
    "Chicago, IL",
    "Washington, DC",
];

pub const RECRUITER_NICHE_OPTIONS: &[&str] = &[
    ALL,
    "Engineering",
    "Design",
    "Product",
    "Marketing",
    "Data Science",
    "Security",
    "Startups",
    "Remote",
    "Leadership",
];

pub const RECRUITER_LOCATION_OPTIONS: &[&str] = &[
    ALL,
    "San Francisco, CA",
    "New York, NY",
    "Remote",
    "Seattle, WA",
    "Austin, TX",
    "Boston, MA",
    "Chicago, IL",
    "Los Angeles, CA",
    "Washington, DC",
];

/// Minimum-rating buttons. 0.0 means unfiltered.
pub const RATING_THRESHOLDS: [f64; 4] = [0.0, 4.5, 4.7, 4.8];

/// Button label for a rating threshold: "All" for 0, otherwise "4.7+".
pub fn rating_label(threshold: f64) -> String {
    if threshold == 0.0 {
        ALL.to_string()
    } else {
        format!("{threshold}+")
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    salary: &str,
    description: &str,
    tags: &[&str],
    posted_date: &str,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type,
        salary: salary.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        posted_date: posted_date.to_string(),
        logo: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn recruiter(
    id: &str,
    name: &str,
    company: &str,
    bio: &str,
    niche: &[&str],
    specialties: &[&str],
    location: &str,
    rating: f64,
    verified: bool,
) -> Recruiter {
    Recruiter {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        bio: bio.to_string(),
        niche: strings(niche),
        specialties: strings(specialties),
        location: location.to_string(),
        rating,
        verified,
        avatar: None,
    }
}

pub fn sample_jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Frontend Engineer",
            "TechFlow",
            "San Francisco, CA",
            JobType::FullTime,
            "$120k - $180k",
            "We're looking for an experienced frontend engineer to join our team and help build the next generation of web applications.",
            &["React", "TypeScript", "Next.js", "UI/UX"],
            "2 days ago",
        ),
        job(
            "2",
            "Product Designer",
            "DesignStudio",
            "New York, NY",
            JobType::FullTime,
            "$100k - $150k",
            "Join our design team to create beautiful and intuitive user experiences for our growing product suite.",
            &["Figma", "Design Systems", "User Research"],
            "1 week ago",
        ),
        job(
            "3",
            "Backend Developer",
            "CloudScale",
            "Remote",
            JobType::Remote,
            "$110k - $170k",
            "Build scalable backend systems using modern technologies. Work with a distributed team of talented engineers.",
            &["Node.js", "Python", "AWS", "Microservices"],
            "3 days ago",
        ),
        job(
            "4",
            "DevOps Engineer",
            "InfraTech",
            "Austin, TX",
            JobType::FullTime,
            "$130k - $190k",
            "Manage our cloud infrastructure and CI/CD pipelines. Help us scale efficiently and reliably.",
            &["Kubernetes", "Docker", "Terraform", "CI/CD"],
            "5 days ago",
        ),
        job(
            "5",
            "Full Stack Developer",
            "StartupHub",
            "Seattle, WA",
            JobType::FullTime,
            "$95k - $140k",
            "Join a fast-paced startup and work across the entire stack. Make a real impact from day one.",
            &["React", "Node.js", "PostgreSQL", "GraphQL"],
            "1 day ago",
        ),
        job(
            "6",
            "Mobile App Developer",
            "AppVenture",
            "Los Angeles, CA",
            JobType::Contract,
            "$80k - $120k",
            "Build native mobile applications for iOS and Android. Work on exciting consumer-facing products.",
            &["React Native", "Swift", "Kotlin"],
            "4 days ago",
        ),
        job(
            "7",
            "Data Scientist",
            "DataInsights",
            "Boston, MA",
            JobType::FullTime,
            "$140k - $200k",
            "Apply machine learning and statistical analysis to solve complex business problems.",
            &["Python", "Machine Learning", "SQL", "TensorFlow"],
            "6 days ago",
        ),
        job(
            "8",
            "UX Researcher",
            "UserFirst",
            "Remote",
            JobType::PartTime,
            "$60k - $90k",
            "Conduct user research and help shape product decisions based on real user insights.",
            &["User Research", "Interviews", "Analytics"],
            "2 weeks ago",
        ),
        job(
            "9",
            "Security Engineer",
            "SecureNet",
            "Washington, DC",
            JobType::FullTime,
            "$150k - $220k",
            "Protect our systems and data from threats. Work on security architecture and incident response.",
            &["Security", "Penetration Testing", "Compliance"],
            "1 week ago",
        ),
        job(
            "10",
            "Marketing Manager",
            "GrowthCo",
            "Chicago, IL",
            JobType::FullTime,
            "$85k - $130k",
            "Drive growth through innovative marketing campaigns and strategies.",
            &["Marketing", "SEO", "Content Strategy"],
            "3 days ago",
        ),
    ]
}

pub fn sample_recruiters() -> Vec<Recruiter> {
    vec![
        recruiter(
            "1",
            "Sarah Chen",
            "TalentBridge",
            "Connecting senior engineers with high-growth startups for over eight years.",
            &["Engineering", "Startups"],
            &["Frontend", "Backend", "Full Stack", "Engineering Management"],
            "San Francisco, CA",
            4.9,
            true,
        ),
        recruiter(
            "2",
            "Marcus Johnson",
            "CreativeHire",
            "Design-focused recruiter placing product designers at consumer brands.",
            &["Design", "Product"],
            &["Product Design", "UX Research", "Brand Design"],
            "New York, NY",
            4.6,
            true,
        ),
        recruiter(
            "3",
            "Priya Patel",
            "DataTalent Partners",
            "Specialist in machine learning and analytics hiring across the US.",
            &["Data Science", "Engineering"],
            &["Machine Learning", "Data Engineering", "Analytics", "MLOps", "AI Research"],
            "Remote",
            4.8,
            false,
        ),
        recruiter(
            "4",
            "James Wilson",
            "SecureStaff",
            "Helping security teams find penetration testers and security architects.",
            &["Security"],
            &["Penetration Testing", "Security Architecture", "Compliance"],
            "Washington, DC",
            4.7,
            true,
        ),
        recruiter(
            "5",
            "Emily Rodriguez",
            "GrowthRecruit",
            "Builds marketing and growth teams for B2B SaaS companies.",
            &["Marketing", "Startups"],
            &["Growth Marketing", "Content", "SEO", "Demand Generation"],
            "Austin, TX",
            4.5,
            false,
        ),
        recruiter(
            "6",
            "David Kim",
            "RemoteFirst Talent",
            "Places engineers and product managers with fully distributed companies.",
            &["Remote", "Engineering", "Product"],
            &["Remote Teams", "DevOps", "Product Management"],
            "Remote",
            4.8,
            true,
        ),
        recruiter(
            "7",
            "Olivia Brown",
            "ExecSearch Group",
            "Executive search for VP and C-level technology leadership roles.",
            &["Leadership"],
            &["CTO Search", "VP Engineering", "Board Advisory"],
            "Boston, MA",
            4.9,
            true,
        ),
        recruiter(
            "8",
            "Michael Lee",
            "CodeCareers",
            "Mobile and frontend hiring for agencies and product studios.",
            &["Engineering", "Design"],
            &["Mobile", "React Native", "iOS", "Android"],
            "Los Angeles, CA",
            4.6,
            false,
        ),
        recruiter(
            "9",
            "Aisha Okafor",
            "ProductPath",
            "Product manager placements from associate PM to head of product.",
            &["Product", "Leadership"],
            &["Product Strategy", "Product Operations"],
            "Chicago, IL",
            4.7,
            true,
        ),
    ]
}
