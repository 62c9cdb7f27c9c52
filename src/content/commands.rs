//! Command table — fixed vocabulary and the Markdown answer for each keyword.

/// The keyword that resets the transcript instead of producing an answer.
pub const CLEAR: &str = "clear";

/// Command name of the synthetic entry every session starts with.
pub const WELCOME_COMMAND: &str = "welcome";

/// Greeting shown as the first transcript entry.
pub const WELCOME_TEXT: &str = "**💻 Welcome to Rahul Kumar's Terminal Portfolio**

Type `help` to see all available commands.";

/// Recognized commands in the order shown in the hint row.
pub const VOCABULARY: [&str; 7] = [
    "help",
    "about",
    "skills",
    "projects",
    "experience",
    "contact",
    CLEAR,
];

const HELP: &str = "**💡 Help Command**

Use this command to see all available commands and their descriptions.

**Available commands:**
- `about` — Know more about me
- `skills` — See my technical skills
- `projects` — View the projects I have worked on
- `experience` — Check my professional experience
- `contact` — Get my contact information
- `clear` — Clear the terminal";

const ABOUT: &str = "**👋 About Me**

Hi, I'm **Rahul Kumar**, a pre-final year *Engineering student at IIT Jodhpur* majoring in *Chemistry*.

I am a **passionate software developer**, continuously contributing through **projects and hands-on development**. I enjoy building solutions that blend creativity with technology, and I am always eager to learn and grow in software development.";

const SKILLS: &str = "**💻 Skills**

**Frontend:** React, TypeScript, TailwindCSS, Framer Motion  
**Backend:** Node.js, Express, Django  
**Databases:** MongoDB, PostgreSQL  
**Languages:** JavaScript, C++, Python  
**Tools:** Git, GitHub, Docker";

const PROJECTS: &str = "
**🚀 Projects**

1. **[Prometeo'25](https://prometeo.in)** — A full-fledged website developed with **React** (frontend) and **Django** (backend) for *IIT Jodhpur's annual tech fest*.  
   - Worked as part of the frontend team  
   - Website received impressive response and served as central platform

2. **[URBAN LUXE](https://ecommerce-lilac-eight-92.vercel.app/)** — A **MERN stack** e-commerce platform  
   - Product listing, cart, checkout, and authentication

3. **[Kathayan'25](https://kathayan.in/)** — Official website for *IIT Jodhpur's annual literature fest*  
   - Contributed as **frontend developer**  
   - Handled entire frontend design and implementation

4. **[HackSprint](https://hack-sprint-iitj.vercel.app/)** — Centralized web platform to host hackathons, daily dev and aptitude challenges, and public project submissions for hands-on learning and technical growth.  
   - Developed as a part of SOC of **DevLup Lab, IIT Jodhpur**

5. **DRDO IITJ Website** — Developed a web platform for **ML-based classification and detection** for defense applications.  
   - Handled frontend development and integration of ML modules
";

const EXPERIENCE: &str = "
**🏢 Experience**

- **Full-Stack Engineer** — Marketing Service Company MUFTLO  
  - Working for the past 3 months on various websites and cloud services  
  - Contributing as a junior developer handling full-stack development tasks

- **Core Member** — DevLup Lab, IIT Jodhpur  
  - Core member of IITJ’s open-source enthusiast club  
  - Contributing to projects promoting open-source development and technical learning

- **Assistant Head, Web Dev Team** — IIT Jodhpur Tech & Literature Fest  
  - Worked on frontend development for two major fest websites  
  - Coordinated with the web team, ensured great team work.
";

const CONTACT: &str = "**📧 Contact**

- **Email:** b23cy1017@iitj.ac.in
- **GitHub:** [github.com/rahul-1901](https://github.com/rahulkumar1901)  
- **LinkedIn:** [linkedin.com/in/rahul-kumar-52898928a](https://www.linkedin.com/in/rahul-kumar-52898928a)";

/// Keyword → answer. `clear` is deliberately absent: it is an action, not an answer.
const ANSWERS: &[(&str, &str)] = &[
    ("help", HELP),
    ("about", ABOUT),
    ("skills", SKILLS),
    ("projects", PROJECTS),
    ("experience", EXPERIENCE),
    ("contact", CONTACT),
];

/// Look up the stored answer for an already-normalized command name.
pub fn answer(command: &str) -> Option<&'static str> {
    ANSWERS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, text)| *text)
}

/// The message shown for input that matches no command.
pub fn not_found(command: &str) -> String {
    format!("❌ Command not found: {command}. Type `help` for available commands.")
}
