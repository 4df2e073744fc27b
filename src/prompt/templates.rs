// Instruction text and worked examples for each generation mode.
// Plain data: edit freely, but keep the <Front>/<Back>/<Extra> tag names,
// the response parser depends on them.

pub const DICTIONARY_INSTRUCTIONS: &str = "\
Instructions: the following json are contents from a dictionary. Generate exactly one concise Anki flash card \
with the Swedish word and its translations to English, it is possible to include a few synonyms if they are very \
close in meaning. Treat the json as the canonical word senses; do not invent senses it does not contain.
In the field \"Extra\", we want to have example sentences (but not too long paragraphs) with both Swedish and \
translation, important grammatical and other info to help the user learn better, it can be left empty if not necessary.
Only Swedish in Back and English in Front. Keep the front and back lean and include Swedish descriptions as well as \
English in Extra (English should come before Swedish).
Only generate the flash card within the provided tags (Front, Back, Extra) so they are parsed. Add simple html to \
Extra to discern English and Swedish: English sentences in <i>...</i>, line breaks as <br>, numbered senses as \
<b>1.</b>, <b>2.</b>. Avoid unnecessary general words (like \"English\", \"Swedish\", \"Inflection:\").
For nouns and adjectives, start Extra with the inflected forms in parentheses.
For verbs, Extra should start with this format 〈att, , har , är, !〉 filled with the verb's forms.
";

pub const DICTIONARY_EXAMPLES: &str = "\
Example output 1:
<Front>mild, minor</Front>
<Back>lindrig | mild</Back>
<Extra>(lindrigt, lindriga)<br> Inte allvarlig, obetydlig, lätt<br><br><i>She only suffered minor injuries in the accident.</i><br>hon fick bara lindriga skador vid olyckan</Extra>

Example output 2:
<Front>serious, solemn, severe</Front>
<Back>allvarlig | högtidlig, sträng, allvarsam</Back>
<Extra>(allvarligt, allvarliga)<br><b>1.</b> solemn, stern, grave (högtidlig, sträng, allvarsam)<br><b>2.</b> worrying, dangerous (oroande, farlig)<br><b>3.</b> sincere, honest, serious (uppriktig, ärlig, seriös)<br><br><i>The principal looked seriously at the boys.</i><br>rektorn såg allvarligt på pojkarna<br><br><i>A serious illness.</i><br>en allvarlig sjukdom</Extra>

Example output 3:
<Front>to train, to practise</Front>
<Back>träna</Back>
<Extra>〈att träna, tränade, har tränat, tränar, träna!〉<br>öva, förbereda sig<br><br><i>She trains every day before the race.</i><br>hon tränar varje dag inför loppet</Extra>
";

pub const CONTEXT_WEAVE_INSTRUCTIONS: &str = "\
The user also gave the following sentence or context. Weave it into Extra: show it in Swedish and English \
(English first, in <i>...</i>), correcting its grammar if needed, right after the inflected forms. \
Front and Back stay about the dictionary word.
User context: ";

pub const SENTENCE_INSTRUCTIONS: &str = "\
Instructions: the user input below is a sentence or a request written by a learner of Swedish, in Swedish or English. \
Generate exactly one concise Anki flash card for it.
If the input is a Swedish sentence with grammar mistakes, correct it and mention the correction briefly in Extra.
If the input is a request (for example \"how do I ask for the bill\"), answer it with a short natural Swedish phrase; \
when it helps, synthesize a short natural dialogue of two to four lines.
Put all English text in Front and all Swedish text in Back. Extra holds short notes on grammar, word choice or \
register, English in <i>...</i> and Swedish plain, line breaks as <br>; it can be left empty if not necessary.
Only generate the flash card within the provided tags (Front, Back, Extra) so they are parsed. Avoid unnecessary \
general words (like \"English\", \"Swedish\", \"Translation:\").
";

pub const SENTENCE_EXAMPLES: &str = "\
Example input 1: jag har bott här sedan tre år
Example output 1:
<Front>I have lived here for three years.</Front>
<Back>Jag har bott här i tre år.</Back>
<Extra><i>\"for\" + duration is</i> i<br><i>\"since\" + point in time is</i> sedan<br>sedan 2021, i tre år</Extra>

Example input 2: how do I ask if a seat is free on the train?
Example output 2:
<Front>- Excuse me, is this seat free?<br>- Yes, go ahead and sit down.</Front>
<Back>- Ursäkta, är den här platsen ledig?<br>- Ja, varsågod och sätt dig.</Back>
<Extra><i>ledig = free, unoccupied</i><br><i>varsågod is used when offering something</i></Extra>
";

pub const INPUT_JSON_LABEL: &str = "Input json: ";
pub const USER_INPUT_LABEL: &str = "User input: ";
