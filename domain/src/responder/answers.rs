//! Canned answer copy for the standard rule table.

pub const TRANSFORMER_ARCHITECTURE: &str = "While I'm still learning deeply about transformers, I understand they're the backbone of modern NLP models like GPT and BERT. \
Transformers use self-attention mechanisms to weigh the importance of different words in context, which allows them to handle long-range \
dependencies in text better than previous RNN or LSTM models. The architecture typically consists of encoders and decoders with multiple \
attention heads, allowing the model to focus on different parts of the input sequence simultaneously.";

pub const MACHINE_LEARNING_IN_PROJECTS: &str = "In my YouTube recommendation project, I implemented content-based filtering algorithms to suggest videos based on similarity metrics. \
For GradePro, I used regression models to predict student grades based on historical performance data and attendance patterns. \
I particularly enjoyed the challenge of feature engineering - determining which factors were most predictive of academic success.";

pub const PROMPT_ENGINEERING: &str = "Prompt engineering is the process of crafting effective inputs to guide AI models (especially LLMs) toward desired outputs. \
I understand it involves techniques like few-shot learning, chain-of-thought prompting, and carefully structuring inputs to \
elicit more accurate, relevant, or creative responses from models. It's fascinating how the same model can produce dramatically \
different results based solely on how you frame the prompt.";

pub const SUPERVISED_VS_UNSUPERVISED: &str = "Supervised learning uses labeled data where the algorithm learns to map inputs to known outputs - like predicting house prices \
based on features where you have historical price data. Unsupervised learning works with unlabeled data to find patterns or \
structures - like clustering customers based on purchasing behavior without predefined groups. In my GradePro project, I used \
supervised learning techniques since we had historical grade data to train on.";

pub const GENERATIVE_AI: &str = "I'm fascinated by generative AI's ability to create new content that feels authentic and creative. The applications span from \
text generation to image creation and even code writing. What interests me most is the potential for generative AI to augment \
human creativity rather than replace it - like how tools like GitHub Copilot can help developers write code faster while still \
requiring human judgment and oversight.";

pub const FALLBACK: &str = "That's a great question about AI! While I have theoretical knowledge of AI concepts and have applied machine learning in my \
projects like GradePro and the YouTube recommendation system, I'm continuously expanding my knowledge in this rapidly evolving \
field. I'm particularly interested in the practical applications of AI in software development and creating intuitive user \
experiences enhanced by intelligent systems.";
