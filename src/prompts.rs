/// A canned prompt offered in the sidebar as an alternative to free text.
pub struct Scenario {
    pub title: &'static str,
    pub text: &'static str,
}

/// Label of the free-text option in the scenario selector.
pub const WRITE_YOUR_OWN: &str = "Write your own query";

/// Fixed instruction sent as the first part of every model request.
/// Carried over from the product prompt as shipped.
pub const SYSTEM_PROMPT: &str = "\
You are an expert in nutritionist where you need to see the food items from the image\n\
and estimate approximately the total calories, also provide the details of every food items with calories intake\n\
is below format\n\
\n\
1. Item 1 no of calories\n\
2. Item 2 no of calories\n\
----\n\
----\n\
\n\
and\n\
Answer according to the givin in double quotes. Give your point of view based on the Image input and the Prompt.\n";

pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        title: "Scenario 1: Weight Loss Journey",
        text: "A user with a goal to lose weight uses Nutritionist AI to aid in their weight loss journey. \
With specific dietary preferences and a certain activity level, they input their dietary preferences \
and health goals into the app. Nutritionist AI creates a calorie-controlled, nutrient-dense meal plan \
tailored to their diet. The user logs their meals by taking photos or scanning barcodes, and the app \
provides feedback on their calorie intake and nutritional balance, suggesting necessary adjustments. \
By syncing their fitness tracker, the app integrates their physical activity data, offering \
comprehensive insights to help the user stay on track with their weight loss while maintaining proper \
nutrition.",
    },
    Scenario {
        title: "Scenario 2: Managing Diabetes",
        text: "A user with Type 2 Diabetes relies on Nutritionist AI to manage their condition through diet. \
They input their dietary preferences and diabetes condition, and the app generates meal plans that \
focus on low carbohydrate and high fiber content to help control their blood sugar levels. The user \
uses the app to log their meals, receiving immediate feedback on their suitability for diabetes \
management. Detailed nutritional breakdowns highlight carbohydrate content and glycemic index, aiding \
the user in making informed food choices. Additionally, the app provides educational resources about \
managing diabetes through diet, keeping the user well-informed and empowered to handle their condition \
better.",
    },
    Scenario {
        title: "Scenario 3: Building Muscle",
        text: "A user who is a strength training enthusiast uses Nutritionist AI to support their goal of \
gaining muscle mass. With a preference for high-protein meals and an intense workout regime, they \
input their dietary preferences and fitness goals into the app. Nutritionist AI generates meal plans \
rich in protein and essential nutrients necessary for muscle growth. The user benefits from a variety \
of high-protein recipes that cater to their needs, with each recipe including detailed instructions \
and nutritional information. By connecting their fitness tracker, the app accounts for their caloric \
expenditure and provides insights on balancing their protein intake with their workouts, optimizing \
their muscle-building efforts.",
    },
];

/// Everything the scenario selector offers, in display order.
pub fn scenario_options() -> Vec<&'static str> {
    let mut options: Vec<&'static str> = SCENARIOS.iter().map(|s| s.title).collect();
    options.push(WRITE_YOUR_OWN);
    options
}

/// Resolve the selector choice to the prompt string sent to the model.
///
/// A scenario title resolves to that scenario's text; the free-text option
/// resolves to `query` exactly as typed (empty stays empty). `None` means the
/// choice doesn't exist in the selector.
pub fn resolve_prompt(choice: &str, query: &str) -> Option<String> {
    if choice == WRITE_YOUR_OWN {
        return Some(query.to_string());
    }

    SCENARIOS
        .iter()
        .find(|s| s.title == choice)
        .map(|s| s.text.to_string())
}
