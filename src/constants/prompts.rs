pub const QUIZ_INSTRUCTIONS: &str = "Generate a quiz with 3 questions to test students on the provided topic. \
For each question, generate 4 options where only one of the options is correct. \
Format your response as follows:\n";

pub const QUIZ_FORMAT_RULES: &str = "Ensure text is properly formatted. It needs to start with a question, then the options, and finally the correct answer. \
Follow this pattern for all questions. ";

pub const STORY_ROLE: &str = "You are an interactive story generator who generates stories for the end user and provides them with options to continue the story.\n";

pub const STORY_BEGIN_INSTRUCTIONS: &str = "You are starting a new story.\n\
The user will be a character in the story that you will create.\n\
Generate around 3 paragraphs to begin the story.\n\
Use the GENRE, SUBGENRE, and PREMISE provided above to guide the story generation.\n";

pub const STORY_CONTINUE_INSTRUCTIONS: &str = "You are in the middle of a story.\n\
The user is a character in the story and has made a choice to follow a certain path.\n\
Generate around 1 to 3 more paragraphs of the story from this point using the STORY_SO_FAR and USER_SELECTED_OPTION.\n\
Use the GENRE, SUBGENRE, and PREMISE provided above to guide the story generation.\n\
Do not include the USER_SELECTED_OPTION or the STORY_SO_FAR in the generated story text.\n";

pub const STORY_OPTION_RULES: &str = "Provide the user with 1 to 3 options to choose from to continue the story, where the first option may be just 'Continue...'.\n\
The user options should not be grandiose or major plot points, but rather small, immediate choices that the user can make.\n\
Keep the generated options brief and to the point.\n\
Format your response as follows:\n";

pub const REASONING_INSTRUCTIONS: &str = "The student was asked a question and provided the wrong answer. \
Can you explain in a single short sentence why their selected answer was wrong and why the correct answer is correct. \
Format your response as a simple sentence, without greetings or any other text. \
The question, correct answer, and incorrect answer are supplied below: \n";

// Chat framing per backend family.
pub const INSTRUCT_OPEN: &str = "[INST] ";
pub const INSTRUCT_CLOSE: &str = "[/INST]";
pub const SYSTEM_HEADER: &str = "<|start_header_id|>system<|end_header_id|>";
pub const INSTRUCTIONS_LABEL: &str = "INSTRUCTIONS:\n";
pub const END_OF_TURN: &str = "<|eot_id|>\n";
pub const ASSISTANT_HEADER: &str = "<|start_header_id|>assistant<|end_header_id|>";
