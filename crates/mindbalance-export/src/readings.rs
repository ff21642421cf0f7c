//! Pre-written readings keyed by scale id and severity key.
//!
//! Summaries are Tera templates rendered against a `ResultSummary`.

pub struct Reading {
    pub scale_id: &'static str,
    pub key: &'static str,
    pub summary: &'static str,
    pub insights: &'static [&'static str],
    pub suggestions: &'static [&'static str],
    pub warning: Option<&'static str>,
}

impl Reading {
    pub fn template_name(&self) -> String {
        template_name(self.scale_id, self.key)
    }
}

pub fn template_name(scale_id: &str, key: &str) -> String {
    format!("{scale_id}.{key}")
}

/// The reading for a verdict, if one has been written.
pub fn reading_for(scale_id: &str, key: &str) -> Option<&'static Reading> {
    READINGS
        .iter()
        .find(|r| r.scale_id == scale_id && r.key == key)
}

pub static READINGS: &[Reading] = &[
    Reading {
        scale_id: "phq9",
        key: "minimal",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} puts depressive symptoms at their lowest level. Your overall mood looks good.",
        insights: &[
            "You are keeping a positive outlook on daily life.",
            "Everyday activities and social life are working normally.",
            "Sleep and appetite are fairly stable.",
        ],
        suggestions: &[
            "Keep up your regular sleep and exercise habits.",
            "Look after the relationships that support you.",
            "Check in on your mood from time to time.",
            "Learn a few stress management skills as prevention.",
        ],
        warning: None,
    },
    Reading {
        scale_id: "phq9",
        key: "mild",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} shows a mild tendency toward low mood. This is a common fluctuation and usually improves with small adjustments.",
        insights: &[
            "Some things may feel less interesting than usual.",
            "Your mood dips at times but stays manageable.",
            "Daily functioning is mostly normal, though you may feel tired.",
        ],
        suggestions: &[
            "Spend more time outdoors and get regular exercise.",
            "Share how you feel with family or friends.",
            "Try keeping a journal of your mood.",
            "Keep a regular routine, especially for sleep.",
            "If symptoms last more than two weeks, talk to a professional.",
        ],
        warning: None,
    },
    Reading {
        scale_id: "phq9",
        key: "moderate",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} indicates moderate depressive symptoms. Take this seriously and consider professional help.",
        insights: &[
            "Low mood may already be affecting daily life.",
            "Sleep or appetite may have changed noticeably.",
            "Concentration and motivation may be lower.",
            "Your sense of self-worth may be affected.",
        ],
        suggestions: &[
            "Book an appointment with a counsellor or doctor.",
            "Do not carry this alone; lean on someone you trust.",
            "Keep a basic daily structure.",
            "Avoid making major decisions for now.",
            "Practise relaxation such as slow breathing or meditation.",
        ],
        warning: Some("If you have thoughts of harming yourself, seek help immediately."),
    },
    Reading {
        scale_id: "phq9",
        key: "modsev",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} indicates moderately severe depressive symptoms. Please seek professional psychological or medical help soon.",
        insights: &[
            "Symptoms may be seriously affecting work and life.",
            "You may feel persistently exhausted and hopeless.",
            "Social and daily activities may have dropped off.",
            "A professional assessment and support are needed.",
        ],
        suggestions: &[
            "Arrange to see a psychiatrist or psychologist as soon as possible.",
            "Let family or friends know how you are doing.",
            "Do not stop any medication you already take.",
            "Keep up basic self-care.",
            "Put a safety plan in place.",
        ],
        warning: Some("Please seek professional help. If you have thoughts of self-harm or suicide, contact a crisis line or go to an emergency department right away."),
    },
    Reading {
        scale_id: "phq9",
        key: "severe",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} indicates severe depressive symptoms. This needs attention right away.",
        insights: &[
            "Symptoms may be seriously limiting daily functioning.",
            "You may feel extreme hopelessness.",
            "Looking after yourself may be very hard right now.",
        ],
        suggestions: &[
            "Seek professional medical help immediately.",
            "Tell a family member or someone you trust.",
            "Do not stay alone.",
            "Call a crisis line for immediate support.",
        ],
        warning: Some("This is urgent. If you have any thoughts of self-harm, call emergency services or go to the nearest emergency department now."),
    },
    Reading {
        scale_id: "gad7",
        key: "minimal",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} shows a low level of anxiety. Your state of mind is fairly steady.",
        insights: &[
            "You are handling everyday stress well.",
            "Worry and tension are within the normal range.",
            "Sleep and concentration are mostly normal.",
        ],
        suggestions: &[
            "Keep using the coping strategies that work for you.",
            "Make regular time to relax.",
            "Keep exercising.",
            "Limit caffeine.",
        ],
        warning: None,
    },
    Reading {
        scale_id: "gad7",
        key: "mild",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} shows mild anxiety, which usually responds well to self-care.",
        insights: &[
            "Worry may occasionally feel hard to control.",
            "You may feel slightly tense or restless.",
            "Sleep may be disturbed now and then.",
        ],
        suggestions: &[
            "Learn and practise relaxation such as deep breathing or progressive muscle relaxation.",
            "Exercise regularly, at least 150 minutes a week.",
            "Limit time spent on social media and news.",
            "Practise mindfulness meditation.",
            "If symptoms persist, consider talking to a professional.",
        ],
        warning: None,
    },
    Reading {
        scale_id: "gad7",
        key: "moderate",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} shows moderate anxiety. Take active steps and consider professional help.",
        insights: &[
            "Worry and tension may be affecting daily life.",
            "Relaxing and falling asleep may be difficult.",
            "Physical symptoms such as a racing heart or sweating may appear.",
        ],
        suggestions: &[
            "Consider seeing a mental health professional.",
            "Practise relaxation at a fixed time each day.",
            "Cut down on stimulants such as coffee and alcohol.",
            "Keep a regular daily routine.",
            "Learn cognitive behavioural techniques for spotting anxious thoughts.",
        ],
        warning: None,
    },
    Reading {
        scale_id: "gad7",
        key: "severe",
        summary: "Your {{ scale_title }} score of {{ total }} / {{ max }} shows a high level of anxiety. Please seek professional help soon.",
        insights: &[
            "Anxiety may be seriously affecting work and social life.",
            "It may come with marked physical symptoms.",
            "Daily functioning may be clearly affected.",
        ],
        suggestions: &[
            "Arrange counselling or a psychiatric appointment soon.",
            "Let your family know how you are doing.",
            "While you wait, practise simple breathing techniques.",
            "Avoid making major decisions for now.",
            "Cognitive behavioural therapy works well for anxiety.",
        ],
        warning: Some("If anxiety comes with panic attacks or seriously disrupts daily life, see a doctor soon."),
    },
];
