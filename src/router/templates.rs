//! String templates for synthesized responses
//!
//! The cascade's lower-priority rules do not look anything up; they fill a
//! generic markup template with whatever query text remains after the
//! trigger words are removed.

/// Templated topic response for a broader-keyword-table hit
pub fn topic_response(topic: &str, category: &str, description: &str) -> String {
    let topic_title = topic.to_uppercase();

    format!(
        "# {topic_title}

## Overview
{topic_title} is a {description} in the {category} domain.

## Key Features
• **Modern Technology** - Uses latest industry standards
• **Scalable** - Grows with your needs
• **Community Support** - Large developer community
• **Documentation** - Comprehensive learning resources
• **Industry Adoption** - Used by major companies

## Common Use Cases
• Web Development Projects
• Enterprise Applications
• Startup Solutions
• Learning and Education
• Professional Development

## Getting Started
1. **Learn the Basics** - Understand core concepts
2. **Practice Projects** - Build small applications
3. **Join Communities** - Connect with other developers
4. **Read Documentation** - Study official guides
5. **Build Portfolio** - Create showcase projects

## Benefits
• Improved productivity
• Better code quality
• Enhanced user experience
• Career opportunities
• Industry relevance"
    )
}

/// Procedural-guide response for "how to"/"tutorial" queries
pub fn how_to_response(query: &str) -> String {
    let topic = query.replacen("how to", "", 1).trim().to_uppercase();

    format!(
        "# How To Guide: {topic}

## Step-by-Step Process

## Preparation
• **Research** - Understand the requirements
• **Plan** - Create a clear roadmap
• **Gather Resources** - Collect necessary tools
• **Set Goals** - Define success criteria

## Implementation Steps
1. **Start with Basics** - Learn fundamental concepts
2. **Practice Regularly** - Consistent daily practice
3. **Build Projects** - Apply knowledge practically
4. **Seek Feedback** - Get input from experts
5. **Iterate and Improve** - Refine your approach

## Best Practices
• **Stay Updated** - Follow latest trends
• **Document Progress** - Keep track of learning
• **Join Communities** - Network with peers
• **Be Patient** - Allow time for mastery
• **Stay Consistent** - Regular practice is key

## Common Challenges
• Time management
• Information overload
• Lack of motivation
• Technical difficulties
• Finding quality resources

## Success Tips
• Set realistic goals
• Break down complex tasks
• Celebrate small wins
• Learn from mistakes
• Stay persistent"
    )
}

/// Recommendation response for "best"/"top" queries
pub fn best_response(query: &str) -> String {
    let topic = query
        .replace("best", "")
        .replace("top", "")
        .trim()
        .to_uppercase();

    format!(
        "# Best {topic} Recommendations

## Top Choices

## Popular Options
• **Option 1** - Most widely used and trusted
• **Option 2** - Best for beginners and learning
• **Option 3** - Advanced features and flexibility
• **Option 4** - Cost-effective and reliable
• **Option 5** - Latest technology and innovation

## Selection Criteria
• **Ease of Use** - User-friendly interface
• **Performance** - Speed and efficiency
• **Community** - Active support and resources
• **Documentation** - Clear guides and tutorials
• **Cost** - Value for money

## Comparison Factors
1. **Learning Curve** - How easy to get started
2. **Features** - Available functionality
3. **Scalability** - Growth potential
4. **Support** - Help and maintenance
5. **Integration** - Works with other tools

## Recommendations by Use Case
• **Beginners** - Start with user-friendly options
• **Professionals** - Choose feature-rich solutions
• **Teams** - Focus on collaboration tools
• **Budget-Conscious** - Consider free alternatives
• **Enterprise** - Prioritize scalability and support"
    )
}

/// Comparison response for "difference"/"vs"/"between" queries
pub fn comparison_response(_query: &str) -> String {
    "# Comparison Guide

## Overview
Comparing different options to help you make an informed decision.

## Key Differences
• **Purpose** - Different intended use cases
• **Features** - Varying functionality and capabilities
• **Performance** - Speed and efficiency differences
• **Learning Curve** - Ease of adoption
• **Community** - Support and resources available

## Comparison Matrix

## Feature Analysis
1. **Functionality** - What each option can do
2. **Performance** - Speed and resource usage
3. **Ease of Use** - User experience quality
4. **Documentation** - Quality of learning materials
5. **Community Support** - Help and resources

## Use Case Scenarios
• **Small Projects** - Lightweight solutions
• **Large Applications** - Robust and scalable options
• **Learning** - Beginner-friendly choices
• **Professional** - Industry-standard tools
• **Experimental** - Cutting-edge technologies

## Decision Factors
• Project requirements
• Team expertise
• Budget constraints
• Timeline considerations
• Long-term maintenance

## Recommendation
Choose based on your specific needs, team skills, and project requirements."
        .to_string()
}

/// Unconditional catch-all response echoing the query
pub fn default_response(query: &str) -> String {
    format!(
        "# Information About: {}

## Overview
Here's what you should know about {query}.

## Key Points
• **Important Concept** - Core understanding needed
• **Practical Application** - Real-world usage
• **Benefits** - Advantages and positive aspects
• **Considerations** - Things to keep in mind
• **Learning Path** - How to get started

## Common Questions
1. **What is it?** - Basic definition and purpose
2. **How does it work?** - Underlying mechanisms
3. **Why is it important?** - Relevance and significance
4. **When to use it?** - Appropriate scenarios
5. **How to learn more?** - Resources and next steps

## Getting Started
• Research the basics
• Find reliable resources
• Start with simple examples
• Practice regularly
• Join relevant communities

## Next Steps
• Explore related topics
• Build practical projects
• Connect with experts
• Stay updated with trends
• Share your learning journey",
        query.to_uppercase()
    )
}

/// Response for a video search that matched a category
pub fn video_category_response(category: &str, title: &str) -> String {
    let mut category_title = category.to_string();
    if let Some(first) = category_title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    format!(
        "# {} Video

## Now Playing
**{title}**

## Video Details
• **Category**: {category_title}
• **Type**: Entertainment Video
• **Quality**: High Definition
• **Duration**: Full Length

## Features
• **Auto-play**: Video starts automatically
• **Full Screen**: Click for full screen mode
• **Controls**: Play, pause, volume controls
• **Quality**: Adjustable video quality

## Enjoy Your Video!
Sit back and enjoy this {category} video. You can request more videos anytime!",
        category.to_uppercase()
    )
}

/// Response for a video search that fell back to the default category
pub fn video_fallback_response(clean_query: &str, title: &str) -> String {
    let shown_query = if clean_query.is_empty() {
        "entertainment"
    } else {
        clean_query
    };

    format!(
        "# Video Search Results

## Now Playing
**{title}**

## Search Query
You searched for: \"{shown_query}\"

## Video Information
• **Title**: {title}
• **Category**: Entertainment
• **Status**: Now Playing
• **Quality**: HD

## Available Categories
• **Comedy** - Funny and hilarious videos
• **Music** - Songs and music videos
• **Entertainment** - General entertainment content
• **Sports** - Sports highlights and moments
• **Gaming** - Gaming content and reviews
• **Dance** - Dance performances and tutorials

## Try These Requests
• \"comedy video\"
• \"music video\"
• \"funny video\"
• \"sports video\"
• \"gaming video\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_response_interpolates_fields() {
        let text = topic_response("docker", "DevOps Tool", "containerization platform");
        assert!(text.starts_with("# DOCKER\n"));
        assert!(text.contains("DOCKER is a containerization platform in the DevOps Tool domain."));
    }

    #[test]
    fn test_how_to_strips_trigger_phrase() {
        let text = how_to_response("how to learn rust");
        assert!(text.starts_with("# How To Guide: LEARN RUST\n"));
    }

    #[test]
    fn test_best_strips_trigger_words() {
        let text = best_response("best code editor");
        assert!(text.starts_with("# Best CODE EDITOR Recommendations\n"));
    }

    #[test]
    fn test_default_echoes_query() {
        let text = default_response("weird question");
        assert!(text.starts_with("# Information About: WEIRD QUESTION\n"));
        assert!(text.contains("know about weird question."));
    }

    #[test]
    fn test_video_category_capitalization() {
        let text = video_category_response("comedy", "Comedy Gold");
        assert!(text.starts_with("# COMEDY Video\n"));
        assert!(text.contains("• **Category**: Comedy"));
        assert!(text.contains("**Comedy Gold**"));
    }

    #[test]
    fn test_video_fallback_shows_default_query_when_empty() {
        let text = video_fallback_response("", "Fun Videos");
        assert!(text.contains("You searched for: \"entertainment\""));
    }
}
