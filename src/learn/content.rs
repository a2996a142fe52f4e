//! Static quiz question tables

use serde::{Deserialize, Serialize};

use super::lessons::{BEGINNER_MAX_LEVEL, RENT_BUDGETING, TAX_BASICS, UNDERSTANDING_CREDIT};
use crate::model::UserProfile;

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: Vec<String>,

    /// Index into `choices` of the correct answer
    pub answer_index: usize,

    /// Shown after the user answers
    pub explanation: String,
}

impl QuizQuestion {
    fn new(prompt: impl Into<String>, choices: &[&str], answer_index: usize, explanation: &str) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            answer_index,
            explanation: explanation.to_string(),
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}

/// Plain questions for a lesson module, empty for unknown titles
pub fn module_questions(title: &str) -> Vec<QuizQuestion> {
    match title {
        TAX_BASICS => vec![
            QuizQuestion::new(
                "Which form do most employees receive to report wages for federal taxes?",
                &["W-2", "1040-ES", "Schedule C", "1099-B"],
                0,
                "Most salaried or hourly workers receive a W-2 from their employer each year.",
            ),
            QuizQuestion::new(
                "What is the standard deduction primarily used for?",
                &[
                    "Reducing taxable income",
                    "Lowering credit card interest",
                    "Calculating FICA taxes",
                    "Paying state tax refunds",
                ],
                0,
                "The standard deduction lowers your taxable income before rates are applied.",
            ),
            QuizQuestion::new(
                "Which deadline applies to federal tax returns in most years?",
                &["April 15", "June 30", "September 1", "December 31"],
                0,
                "Federal returns are typically due April 15 unless the date falls on a weekend/holiday.",
            ),
        ],
        RENT_BUDGETING => vec![
            QuizQuestion::new(
                "A common rule suggests housing should stay below what percent of take-home pay?",
                &["30%", "45%", "55%", "70%"],
                0,
                "Keeping housing near 30% helps leave room for savings and other bills.",
            ),
            QuizQuestion::new(
                "Which cost is usually due upfront with a new lease?",
                &["Security deposit", "Gym membership", "401(k) contribution", "Credit card annual fee"],
                0,
                "Most landlords require a refundable security deposit at move-in.",
            ),
            QuizQuestion::new(
                "What does renters insurance primarily cover?",
                &["Personal belongings & liability", "Building repairs", "Mortgage payments", "HOA dues"],
                0,
                "Renters insurance protects your belongings and offers liability coverage.",
            ),
        ],
        UNDERSTANDING_CREDIT => vec![
            QuizQuestion::new(
                "Which factor has the greatest weight in a typical FICO score?",
                &["Payment history", "Credit mix", "New credit", "Age of your pets"],
                0,
                "On-time payments are the largest portion of a FICO score.",
            ),
            QuizQuestion::new(
                "Keeping credit utilization below which threshold is generally recommended?",
                &["30%", "60%", "85%", "100%"],
                0,
                "Staying below 30% of available credit signals responsible usage.",
            ),
            QuizQuestion::new(
                "What happens when you only make the minimum payment on a credit card?",
                &[
                    "You pay more interest over time",
                    "Your interest rate drops to zero",
                    "Your credit score immediately jumps 100 points",
                    "Your account closes automatically",
                ],
                0,
                "Minimums keep the account current but increase total interest costs.",
            ),
        ],
        _ => Vec::new(),
    }
}

fn is_beginner(level: u8) -> bool {
    level <= BEGINNER_MAX_LEVEL
}

/// Onboarding deck tailored to background and experience
pub fn personalized_deck(is_immigrant: bool, level: u8) -> Vec<QuizQuestion> {
    let experience_label = if is_beginner(level) { "beginner" } else { "advanced" };
    let mut deck = Vec::with_capacity(4);

    if is_immigrant {
        deck.push(QuizQuestion::new(
            "Which document is commonly needed to start a U.S. job?",
            &["Social Security number", "Landlord reference", "College diploma", "Passport from any country"],
            0,
            "Employers use your Social Security number to report income and taxes.",
        ));
        deck.push(QuizQuestion::new(
            "How soon should new residents apply for a Social Security number after arrival?",
            &["Within a few weeks", "After five years", "Only before leaving the U.S.", "Never"],
            0,
            "Applying within weeks keeps work and banking plans on track.",
        ));
    } else {
        deck.push(QuizQuestion::new(
            "What is a good first step toward building savings?",
            &[
                "Automate transfers on payday",
                "Spend first and save leftovers",
                "Ignore employer benefits",
                "Delay budgeting",
            ],
            0,
            "Automations make saving consistent and less reliant on willpower.",
        ));
        deck.push(QuizQuestion::new(
            "Which account often offers tax advantages for retirement?",
            &["Roth IRA", "Checking account", "Daily cash jar", "Airline miles"],
            0,
            "Roth IRAs grow tax-free and withdrawals in retirement are tax-free.",
        ));
    }

    if is_beginner(level) {
        deck.push(QuizQuestion::new(
            "What should you track first when building a budget?",
            &["Needs vs wants", "Stock splits", "Vacation souvenirs", "Crypto mining rigs"],
            0,
            "Understanding essential vs discretionary costs keeps spending grounded.",
        ));
    } else {
        deck.push(QuizQuestion::new(
            "Which move helps improve a thin credit file quickly?",
            &[
                "Becoming an authorized user on a seasoned account",
                "Closing all credit cards",
                "Applying for ten cards in one day",
                "Maxing every card every month",
            ],
            0,
            "Authorized users benefit from the primary account holder's history.",
        ));
    }

    deck.push(QuizQuestion::new(
        format!(
            "Level {} means you consider yourself a {}. What's your next best step?",
            level, experience_label
        ),
        &[
            "Review the curated lessons and complete the quiz deck",
            "Skip learning entirely",
            "Only read headlines",
            "Wait a few years before planning",
        ],
        0,
        "Pairing lessons with quizzes reinforces progress tailored to you.",
    ));

    deck
}

/// Scenario questions for a lesson module, phrased for the user's persona
pub fn personalized_module_questions(title: &str, is_immigrant: bool, level: u8) -> Vec<QuizQuestion> {
    let persona = if is_immigrant { "newcomer to the U.S." } else { "U.S.-based earner" };
    let focus = if is_beginner(level) { "foundation" } else { "optimization" };
    let scenario = |base: &str| {
        format!("{} (You identified as a {} working on {} skills.)", base, persona, focus)
    };

    match title {
        TAX_BASICS => vec![
            QuizQuestion::new(
                scenario("Which identification number lets you file taxes and open most bank accounts?"),
                &["Social Security number", "Student ID", "Transit pass", "Library card"],
                0,
                "Linking income to a Social Security number (or ITIN) keeps paychecks and returns on track.",
            ),
            QuizQuestion::new(
                scenario("You received both a W-2 and a 1099 form. What should you do when filing?"),
                &[
                    "Report income from both forms",
                    "Ignore the 1099",
                    "File separate returns for each form",
                    "Only submit the form with the higher amount",
                ],
                0,
                "All taxable income must be included; use both documents inside a single return.",
            ),
            QuizQuestion::new(
                scenario(&format!(
                    "Level {} learners are reviewing refunds. What happens if you withhold more than you owe?",
                    level
                )),
                &[
                    "You receive the excess as a refund",
                    "You're charged a penalty",
                    "Your employer keeps the extra money",
                    "You must refile next year",
                ],
                0,
                "Extra withholding is returned once the IRS processes your return.",
            ),
        ],
        RENT_BUDGETING => vec![
            QuizQuestion::new(
                scenario("A landlord asks for proof of income. Which document best supports your application?"),
                &["Recent pay stubs or offer letter", "Store loyalty card", "Gym contract", "Travel itinerary"],
                0,
                "Verified earnings from pay stubs or offers demonstrate ability to cover rent.",
            ),
            QuizQuestion::new(
                scenario("You set rent to 30% of take-home pay. If monthly net income is $3,600, what's your rent ceiling?"),
                &["$1,080", "$1,800", "$2,400", "$3,000"],
                0,
                "30% of $3,600 equals $1,080, which keeps room for savings and transport.",
            ),
            QuizQuestion::new(
                scenario(&format!(
                    "Level {} planners want to build credit. Which recurring bill could you report through a rent-reporting service?",
                    level
                )),
                &["Your monthly rent payments", "Streaming subscriptions", "Coffee purchases", "Ride-share tips"],
                0,
                "Many services now add on-time rent data to your credit files.",
            ),
        ],
        UNDERSTANDING_CREDIT => vec![
            QuizQuestion::new(
                scenario("After arriving in the U.S., which first step helps establish credit?"),
                &[
                    "Secured credit card or credit-builder loan",
                    "Paying bills with cash only",
                    "Avoiding any accounts",
                    "Opening ten cards immediately",
                ],
                0,
                "Secured products build payment history while keeping limits manageable.",
            ),
            QuizQuestion::new(
                scenario("Your utilization sits at 65%. What action reduces it the fastest?"),
                &[
                    "Pay down balances before the statement closes",
                    "Apply for more store cards",
                    "Increase spending to 90%",
                    "Ignore balances until they charge off",
                ],
                0,
                "Lowering balances is the direct way to reduce utilization.",
            ),
            QuizQuestion::new(
                scenario(&format!(
                    "Level {} goal-setters review credit reports. How often can you get a free copy from each bureau at AnnualCreditReport.com?",
                    level
                )),
                &["Every 12 months", "Every 24 hours", "Only once in a lifetime", "Never"],
                0,
                "Federal law guarantees one free report from each major bureau every year.",
            ),
        ],
        _ => Vec::new(),
    }
}

/// Questions offered for a module given the user's profile
pub fn questions_for(profile: &UserProfile, title: &str) -> Vec<QuizQuestion> {
    if profile.is_personalized() {
        personalized_module_questions(
            title,
            profile.is_immigrant_family == Some(true),
            profile.experience_level.unwrap_or(1),
        )
    } else {
        module_questions(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_module_has_three_questions() {
        for title in [TAX_BASICS, RENT_BUDGETING, UNDERSTANDING_CREDIT] {
            assert_eq!(module_questions(title).len(), 3, "{}", title);
            assert_eq!(personalized_module_questions(title, true, 1).len(), 3, "{}", title);
        }
    }

    #[test]
    fn test_unknown_module_is_empty() {
        assert!(module_questions("Crypto 101").is_empty());
        assert!(personalized_module_questions("Crypto 101", false, 3).is_empty());
    }

    #[test]
    fn test_answer_indices_are_valid() {
        let mut all = personalized_deck(true, 1);
        all.extend(personalized_deck(false, 4));
        for title in [TAX_BASICS, RENT_BUDGETING, UNDERSTANDING_CREDIT] {
            all.extend(module_questions(title));
            all.extend(personalized_module_questions(title, false, 3));
        }
        assert!(all.iter().all(|q| q.answer_index < q.choices.len()));
    }

    #[test]
    fn test_personalized_deck_branches() {
        let newcomer = personalized_deck(true, 1);
        assert_eq!(newcomer.len(), 4);
        assert!(newcomer[0].prompt.contains("U.S. job"));
        assert!(newcomer[2].prompt.contains("budget"));
        assert!(newcomer[3].prompt.starts_with("Level 1 means you consider yourself a beginner"));

        let veteran = personalized_deck(false, 3);
        assert!(veteran[1].prompt.contains("retirement"));
        assert!(veteran[2].prompt.contains("thin credit file"));
        assert!(veteran[3].prompt.contains("advanced"));
    }

    #[test]
    fn test_scenario_prompts_name_persona_and_focus() {
        let questions = personalized_module_questions(UNDERSTANDING_CREDIT, false, 4);
        assert!(questions
            .iter()
            .all(|q| q.prompt.ends_with("(You identified as a U.S.-based earner working on optimization skills.)")));
        assert!(questions[2].prompt.starts_with("Level 4 goal-setters"));
    }

    #[test]
    fn test_questions_follow_personalization() {
        let mut profile = UserProfile::default();
        assert_eq!(questions_for(&profile, TAX_BASICS), module_questions(TAX_BASICS));

        profile.is_immigrant_family = Some(true);
        profile.experience_level = Some(2);
        profile.personalization_complete = Some(true);
        assert_eq!(
            questions_for(&profile, TAX_BASICS),
            personalized_module_questions(TAX_BASICS, true, 2)
        );
    }
}
