// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The editorial taxonomy: topics, failure patterns, decision frameworks,
//! and interview question categories.
//!
//! These are curated tables, not learned ones. Classification is plain
//! case-insensitive keyword containment - an episode is tagged with a topic
//! if any of the topic's keywords appears anywhere in its full text. The
//! tables drive both the build pipeline (tagging episodes, emitting the
//! per-locale topic/framework/failure/interview payloads) and nothing else.

/// A topic with the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct TopicDef {
    pub id: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A failure pattern with example phrasings that select it.
#[derive(Debug, Clone, Copy)]
pub struct FailureDef {
    pub id: &'static str,
    pub name: &'static str,
    pub examples: &'static [&'static str],
}

/// A decision framework attributed to a guest.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub id: &'static str,
    pub name: &'static str,
    pub source: &'static str,
    pub description: &'static str,
}

/// A category of interview questions.
#[derive(Debug, Clone, Copy)]
pub struct InterviewDef {
    pub id: &'static str,
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

pub const TOPICS: &[TopicDef] = &[
    TopicDef {
        id: "product",
        name: "Product Management",
        keywords: &[
            "product", "PM", "roadmap", "spec", "feature", "prioritization",
            "backlog", "PRD", "product strategy", "product discovery",
        ],
    },
    TopicDef {
        id: "growth",
        name: "Growth",
        keywords: &[
            "growth", "acquisition", "retention", "engagement", "viral",
            "funnel", "conversion", "A/B testing", "experimentation",
        ],
    },
    TopicDef {
        id: "leadership",
        name: "Leadership",
        keywords: &[
            "leadership", "manager", "director", "VP", "CEO", "founder",
            "team management", "decision making", "strategy",
        ],
    },
    TopicDef {
        id: "hiring",
        name: "Hiring & Interviewing",
        keywords: &[
            "hiring", "interview", "recruit", "candidate", "onboarding",
            "hiring process", "interview question",
        ],
    },
    TopicDef {
        id: "tech_ai",
        name: "Tech & AI",
        keywords: &[
            "engineering", "software", "AI", "machine learning", "LLM",
            "tech stack", "architecture", "developer", "engineering manager",
        ],
    },
    TopicDef {
        id: "culture",
        name: "Company Culture",
        keywords: &[
            "culture", "values", "mission", "organization", "team dynamic",
            "psychological safety", "belonging",
        ],
    },
    TopicDef {
        id: "finance",
        name: "Fundraising & Finance",
        keywords: &[
            "fundraising", "VC", "venture capital", "investor", "IPO",
            "revenue", "pricing", "business model", "burn rate",
        ],
    },
    TopicDef {
        id: "career",
        name: "Career Development",
        keywords: &[
            "career", "promotion", "skill", "learning", "growth path",
            "IC", "individual contributor", "transition",
        ],
    },
    TopicDef {
        id: "design",
        name: "Design",
        keywords: &[
            "design", "UX", "UI", "user experience", "research",
            "prototype", "wireframe", "design system",
        ],
    },
    TopicDef {
        id: "operations",
        name: "Operations",
        keywords: &[
            "operations", "process", "workflow", "efficiency", "scaling",
        ],
    },
];

pub const FAILURE_PATTERNS: &[FailureDef] = &[
    FailureDef {
        id: "product",
        name: "Product Failures",
        examples: &[
            "building something nobody wants",
            "feature creep",
            "ignoring user feedback",
            "premature scaling",
            "technical debt",
            "solving the wrong problem",
        ],
    },
    FailureDef {
        id: "organizational",
        name: "Organizational Failures",
        examples: &[
            "misaligned incentives",
            "poor communication",
            "lack of clarity",
            "political infighting",
            "unclear ownership",
            "resistance to change",
        ],
    },
    FailureDef {
        id: "market",
        name: "Market Failures",
        examples: &[
            "wrong timing",
            "market not ready",
            "competition outpaced",
            "regulatory issues",
            "market size miscalculation",
        ],
    },
    FailureDef {
        id: "technical",
        name: "Technical Failures",
        examples: &[
            "technical debt accumulation",
            "over-engineering",
            "underestimating complexity",
            "security issues",
            "scaling bottlenecks",
        ],
    },
    FailureDef {
        id: "personal",
        name: "Personal Failures",
        examples: &[
            "burnout",
            "poor work-life balance",
            "ego-driven decisions",
            "fear of failure",
            "not asking for help",
        ],
    },
];

pub const FRAMEWORKS: &[FrameworkDef] = &[
    FrameworkDef {
        id: "two_question_decision",
        name: "Two-Question Decisions",
        source: "Shishir Mehrotra (Coda)",
        description: "Cut a complex decision down to the two questions that partition the decision space.",
    },
    FrameworkDef {
        id: "fear_vs_purpose",
        name: "Fear vs. Purpose",
        source: "Paul Adams (Facebook/Google)",
        description: "Decisions driven by fear tend to fail; decisions driven by purpose tend to succeed.",
    },
    FrameworkDef {
        id: "click_in_abyss",
        name: "Click in the Abyss",
        source: "Ben Horowitz (a16z)",
        description: "When every option is bad, take the slightly better one; hesitating is the worst decision.",
    },
    FrameworkDef {
        id: "run_towards_fear",
        name: "Run Towards Fear",
        source: "Ben Horowitz",
        description: "Leaders build the muscle of deciding in the face of fear; stalling does the most damage.",
    },
    FrameworkDef {
        id: "eigenquestions",
        name: "Eigenquestions",
        source: "Shishir Mehrotra",
        description: "Find the root question whose answer carries the most information about the decision.",
    },
    FrameworkDef {
        id: "come_in_listening",
        name: "Come In Listening",
        source: "Katie Dill (Airbnb/Stripe)",
        description: "Join a new team by listening first to build trust, then push for change.",
    },
    FrameworkDef {
        id: "sunk_cost_psychology",
        name: "Sunk Cost Psychology",
        source: "Ben Horowitz",
        description: "Success accumulates from small decisions; cut losses early and trust the next small step.",
    },
    FrameworkDef {
        id: "trust_building",
        name: "Trust Building",
        source: "Katie Dill",
        description: "Trust takes time; prove you care about the team and the goals they carry.",
    },
];

pub const INTERVIEW_CATEGORIES: &[InterviewDef] = &[
    InterviewDef {
        id: "behavioral",
        name: "Behavioral",
        questions: &[
            "Tell me about a time you failed. What did you learn?",
            "Describe a controversial product decision you were part of.",
            "Tell me about a time you had to work with ambiguity.",
            "What's the hardest thing you've ever done?",
            "Describe a time you changed your mind based on data.",
        ],
    },
    InterviewDef {
        id: "problem_solving",
        name: "Problem Solving",
        questions: &[
            "How would you improve our product?",
            "Walk me through how you'd launch a new feature.",
            "How would you decide between two competing priorities?",
            "How do you prioritize when everything is important?",
        ],
    },
    InterviewDef {
        id: "technical",
        name: "Technical",
        questions: &[
            "How would you work with engineering on a technical roadmap?",
            "Describe how you'd collaborate with design.",
            "How do you evaluate technical feasibility?",
        ],
    },
    InterviewDef {
        id: "leadership",
        name: "Leadership",
        questions: &[
            "How do you influence without authority?",
            "Describe a time you had to influence stakeholders.",
            "How do you handle conflict on your team?",
        ],
    },
    InterviewDef {
        id: "values_fit",
        name: "Values Fit",
        questions: &[
            "Why do you want to work here?",
            "What are you most proud of?",
            "What's your leadership philosophy?",
            "What's your favorite interview question to ask?",
        ],
    },
];

fn classify<'a, T, F>(text: &str, table: &'a [T], keywords: F) -> Vec<String>
where
    F: Fn(&'a T) -> (&'static str, &'static [&'static str]),
{
    let haystack = text.to_lowercase();
    table
        .iter()
        .filter_map(|entry| {
            let (id, words) = keywords(entry);
            words
                .iter()
                .any(|word| haystack.contains(&word.to_lowercase()))
                .then(|| id.to_string())
        })
        .collect()
}

/// Topic ids whose keywords appear in the text, in table order.
pub fn classify_topics(text: &str) -> Vec<String> {
    classify(text, TOPICS, |t| (t.id, t.keywords))
}

/// Failure pattern ids whose example phrasings appear in the text, in table
/// order.
pub fn classify_failures(text: &str) -> Vec<String> {
    classify(text, FAILURE_PATTERNS, |p| (p.id, p.examples))
}
