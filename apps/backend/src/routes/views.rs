//! Minimal server-rendered pages. No templating engine; just enough markup
//! for the quiz to be playable in a browser.

use std::fmt::Write;

use crate::domain::RoundState;
use crate::repos::leaderboard::LeaderboardEntry;

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn start_page() -> String {
    page(
        "Arithmetic Quiz",
        r#"<h1>Arithmetic Quiz</h1>
<form method="post" action="/start">
  <label>Name <input type="text" name="player_name" required></label>
  <label>Level
    <select name="level">
      <option value="easy">Easy</option>
      <option value="hard">Hard</option>
    </select>
  </label>
  <button type="submit">Start</button>
</form>
<p><a href="/leaderboard">Leaderboard</a></p>"#,
    )
}

/// The question page. The countdown runs in the browser and is posted back
/// with every answer; the form submits itself when it reaches zero.
pub fn game_page(round: &RoundState) -> String {
    let body = format!(
        r#"<h1>Player: {name}</h1>
<p>Score: <span id="score">{score}</span></p>
<p>Time left: <span id="timer">{timeleft}</span>s</p>
<form id="answer-form" method="post" action="/submit">
  <label>{question} = <input type="text" name="answer" autofocus autocomplete="off"></label>
  <input type="hidden" id="timeleft" name="timeleft" value="{timeleft}">
  <button type="submit">Submit</button>
</form>
<script>
  (function () {{
    var left = {timeleft};
    var timer = document.getElementById("timer");
    var field = document.getElementById("timeleft");
    setInterval(function () {{
      left -= 1;
      timer.textContent = Math.max(left, 0);
      field.value = left;
      if (left <= 0) {{ document.getElementById("answer-form").submit(); }}
    }}, 1000);
  }})();
</script>"#,
        name = escape_html(&round.player_name),
        score = round.score,
        timeleft = round.timeleft,
        question = escape_html(&round.question.to_string()),
    );
    page("Arithmetic Quiz", &body)
}

pub fn leaderboard_page(entries: &[LeaderboardEntry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        // Writing into a String cannot fail
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
            escape_html(&entry.player_name),
            entry.score,
            entry.total_time,
            entry.average_time,
        );
    }

    let body = format!(
        "<h1>Leaderboard</h1>\n<table>\n\
         <tr><th>Player</th><th>Score</th><th>Total time (s)</th><th>Average time (s)</th></tr>\n\
         {rows}</table>\n<p><a href=\"/\">Play again</a></p>"
    );
    page("Leaderboard", &body)
}
