// Report copy, as HTML fragments. Students replace the interpretations with
// their own findings.

pub const TITLE: &str = "Sleep Data Exploration Demo App";

pub const INTRO: &str = r#"<p>This is an <strong>example dashboard</strong> built on a sleep dataset.</p>
<p>Students can:</p>
<ul>
<li>Explore how lifestyle factors relate to sleep efficiency</li>
<li>Practice building plots from grouped and binned data</li>
<li>Replace the explanations with their <strong>own findings and conclusions</strong></li>
</ul>"#;

pub const PREVIEW_HEADING: &str = "1. Load and Preview the Data";
pub const PREVIEW_HEAD_CAPTION: &str = "First few rows of the dataset:";
pub const PREVIEW_DESCRIBE_CAPTION: &str = "Basic dataset info:";

pub const SMOKING_HEADING: &str = "2. Does smoking relate to sleep efficiency?";
pub const SMOKING_INTRO: &str = r#"<p><strong>Example Question:</strong><br>
Does smoking status appear to be related to sleep efficiency?</p>
<p>Below we compute a cross-tabulation between sleep efficiency and smoking status.
Students can change the binning, or try a different plot (e.g., boxplot by group).</p>"#;
pub const SMOKING_CAPTION: &str = "Proportion of smoking status within each sleep efficiency bin:";
pub const SMOKING_NOTE: &str = r#"<p>📝 <strong>Example Interpretation (students can edit):</strong><br>
It appears that the proportion of smokers is somewhat higher in lower sleep-efficiency bins,
suggesting smoking <em>may</em> be associated with reduced sleep quality.<br>
Students should check this more carefully using statistics or different visualizations.</p>"#;

pub const AGE_HEADING: &str = "3. Does age impact sleep efficiency?";
pub const AGE_INTRO: &str = r#"<p>We group age into categories and look at the average sleep efficiency for each group.
Students can adjust the age groups or use other plots like boxplots.</p>"#;
pub const AGE_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
In this dataset, older groups appear to have slightly higher average sleep efficiency.<br>
Students can investigate whether this is due to lifestyle factors, sample bias, or other variables.</p>"#;

pub const BEDTIME_HEADING: &str = "4. Does going to bed earlier or later affect sleep efficiency?";
pub const BEDTIME_INTRO: &str = r#"<p>We convert bedtime to numeric hours and plot it against sleep efficiency.
Evening bedtimes appear as negative hours, early-morning bedtimes as positive ones.
Students can experiment with different time encodings or transformations.</p>"#;
pub const BEDTIME_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
There is a slight trend where earlier bedtimes correspond to higher sleep efficiency,
but the relationship is noisy. Students can try smoothing, regression, or binning bedtimes.</p>"#;

pub const EXERCISE_HEADING: &str = "5. Does exercise frequency relate to sleep efficiency?";
pub const EXERCISE_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
The plot suggests that more frequent exercise may be associated with higher sleep efficiency.<br>
Students should confirm by computing correlation or comparing group means.</p>"#;

pub const CAFFEINE_HEADING: &str = "6. How does caffeine consumption relate to sleep efficiency?";
pub const CAFFEINE_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
The points look quite spread out, and there is no obvious simple correlation by eye.<br>
Students can compute correlation coefficients or try alternative visualizations.</p>"#;

pub const REM_HEADING: &str = "7. Do people with less REM sleep drink more caffeine?";
pub const REM_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
Again, the relationship appears weak in this dataset.<br>
Students can test this formally or segment by age, gender, or other factors.</p>"#;

pub const AGE_BEDTIME_HEADING: &str = "8. Is age related to bedtime?";
pub const AGE_BEDTIME_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
Different age groups may have different bedtime distributions.<br>
Students can refine this by using separate subplots or faceting.</p>"#;

pub const GENDER_HEADING: &str = "9. Does gender play a role in sleep efficiency or duration?";
pub const GENDER_NOTE: &str = r#"<p>📝 <strong>Example Interpretation:</strong><br>
The distributions by gender appear fairly similar.<br>
Students can compute summary statistics (mean, median, variance) to quantify differences.</p>"#;

pub const CONCLUSION_HEADING: &str = "10. Conclusion (Students Write Here)";
pub const CONCLUSION: &str = r#"<p>This section is intentionally left for <strong>students</strong> to summarize their findings.</p>
<p>You might answer questions like:</p>
<ul>
<li>Which factors seem most strongly related to sleep efficiency?</li>
<li>Which relationships were weaker or surprising?</li>
<li>What limitations does this dataset have?</li>
<li>What further analysis would you do?</li>
</ul>
<p>✏️ <em>Edit this text in the report commentary to write your own conclusions.</em></p>"#;
