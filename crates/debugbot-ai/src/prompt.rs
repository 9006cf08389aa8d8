// Prompt construction for code and log analysis

/// Prompt for a code analysis request
pub fn code_analysis_prompt(code: &str, context: Option<&str>, user_prompt: Option<&str>) -> String {
    let mut prompt = format!(
        r#"You are an expert code analyzer focusing on API debugging and optimization.
Analyze the following code:
```
{}
```
{}

Default Analysis Tasks:
1. Code structure insights
2. Potential improvements
3. Best practices recommendations
4. Specific code quality suggestions"#,
        code,
        context_line(context)
    );
    append_user_request(&mut prompt, user_prompt);
    prompt
}

/// Prompt for a log analysis request, optionally with the code that produced the logs
pub fn log_analysis_prompt(
    logs: &str,
    context: Option<&str>,
    user_prompt: Option<&str>,
    code: Option<&str>,
) -> String {
    let mut prompt = format!(
        r#"You are an expert in debugging API logs and identifying issues.
Analyze the following logs:
```
{}
```
{}"#,
        logs,
        context_line(context)
    );

    if let Some(code) = code.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("\n\nRelated code:\n```\n{}\n```", code));
    }

    prompt.push_str(
        r#"

Default Analysis Tasks:
1. Potential root causes
2. Specific debugging steps
3. Recommended fixes
4. Best practices to prevent similar issues
5. Provide updated code to address the issue"#,
    );
    append_user_request(&mut prompt, user_prompt);
    prompt
}

fn context_line(context: Option<&str>) -> String {
    match context.filter(|c| !c.is_empty()) {
        Some(c) => format!("Context: {}", c),
        None => String::new(),
    }
}

fn append_user_request(prompt: &mut String, user_prompt: Option<&str>) {
    if let Some(request) = user_prompt.filter(|p| !p.is_empty()) {
        prompt.push_str(&format!("\n\nUser's Specific Request:\n{}", request));
        prompt.push_str(
            "\n\nPlease address the user's specific request while also considering the default analysis tasks where relevant.",
        );
    }
}
