//! Canned FAQ entries and fallback replies for the HR help assistant

/// Question fragment and answer, in priority order.
pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "how do i create an employee",
        "To create an employee: Go to Employees > Add Employee, fill in their details (name, email, department, position), and click Save.",
    ),
    (
        "how do i run payroll",
        "To run payroll: Navigate to Payroll > Process Now, select the month, review the details, and click Process Payroll.",
    ),
    (
        "what is ai resume screening",
        "AI Resume Screening automatically analyzes resumes using NLP, ranks candidates, extracts skills, and provides match scores with job descriptions.",
    ),
    (
        "how do i view attendance",
        "To view attendance: Go to Attendance Tracking, select a date or date range, and view employee check-ins and check-outs.",
    ),
    (
        "what are the roles",
        "HRMS AI supports 5 roles: Admin (full access), Manager (team oversight), HR (HR operations), Recruiter (hiring), and Employee (personal dashboard).",
    ),
    (
        "how do i schedule an interview",
        "Go to AI Tools > Voice Interview, select a candidate, customize questions, choose a date/time, and send the interview link.",
    ),
    (
        "what is predictive analytics",
        "Predictive Analytics forecasts attrition rates, hiring needs, payroll trends, and workforce changes using AI/ML models.",
    ),
    (
        "how do i check performance scores",
        "Navigate to Analytics > Performance by Department or Dashboard > AI Insights to view AI-driven performance evaluations.",
    ),
    (
        "how do i manage benefits",
        "Go to Benefits Management, select an employee, choose benefit plans, set coverage amounts, and save.",
    ),
    (
        "what about data security",
        "HRMS AI uses JWT authentication, role-based access control, data encryption, OAuth 2.0, and follows enterprise security standards.",
    ),
];

pub const GREETING: &str = "👋 Hi! I'm your HR Assistant. Ask me anything about HRMS AI features, how to use the platform, or HR best practices!";

pub const CAPABILITIES_REPLY: &str = "I can help you with:\n• Creating and managing employees\n• Running payroll\n• AI resume screening\n• Attendance tracking\n• Performance evaluations\n• Interview scheduling\n• Benefits management\n• And much more! Ask me anything specific.";

pub const HELLO_REPLY: &str = "Hello! 👋 How can I assist you with HRMS AI today?";

pub const THANKS_REPLY: &str = "You're welcome! 😊 Let me know if you need any other help.";

pub const FALLBACK_REPLY: &str = "I'm here to help! Try asking about specific features like 'How do I create an employee?', 'How do I run payroll?', or 'What is AI resume screening?'";

/// Triggers checked after the FAQ table, each with its reply.
pub const SMALL_TALK: &[(&[&str], &str)] = &[
    (&["help", "what can you do"], CAPABILITIES_REPLY),
    (&["hello", "hi"], HELLO_REPLY),
    (&["thank"], THANKS_REPLY),
];
